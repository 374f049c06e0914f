//! Department derivation from the free-text owner field.
//!
//! Owners are recorded as `"<department> <person>"` (e.g. `"영업1팀 김철수"`).
//! The grouping key for rollups is the first whitespace-delimited token.
//! This is a string-parsing heuristic inherited from how the data is entered;
//! keeping it in one named function makes the fragility visible and testable
//! instead of implicit.

/// Sentinel department for empty or blank owners.
pub const UNASSIGNED: &str = "unassigned/shared";

/// First whitespace-delimited token of `owner`, or [`UNASSIGNED`] when the
/// owner is empty or whitespace-only.
#[must_use]
pub fn derive(owner: &str) -> &str {
    owner.split_whitespace().next().unwrap_or(UNASSIGNED)
}
