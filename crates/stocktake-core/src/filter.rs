//! Pure snapshot partitioning, compound filters, and free-text search.
//!
//! All functions operate on an in-memory snapshot (`&[Asset]`) and never
//! touch the store, so an empty or degraded snapshot is just empty input.

use std::collections::BTreeSet;

use crate::model::{Asset, department};

/// A snapshot split into the records reporting operates on and the
/// provisional drafts excluded from active views.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub active: Vec<Asset>,
    pub drafts: Vec<Asset>,
}

/// Split a raw snapshot into active records and drafts.
#[must_use]
pub fn partition_drafts(snapshot: &[Asset]) -> Partition {
    let mut partition = Partition::default();
    for asset in snapshot {
        if asset.status.is_draft() {
            partition.drafts.push(asset.clone());
        } else {
            partition.active.push(asset.clone());
        }
    }
    partition
}

/// Compound filter criteria over a snapshot.
///
/// For the two set criteria, `None` means *unset* (include everything) while
/// `Some(empty)` means *exclude everything*; the distinction matters for
/// callers that persist a selection. All criteria combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFilter {
    /// Allowed derived departments, or `None` for all observed values.
    pub departments: Option<BTreeSet<String>>,
    /// Allowed category wire names, or `None` for all observed values.
    pub categories: Option<BTreeSet<String>>,
    /// Case-sensitive substring match against `asset_code` OR `owner`.
    pub query: Option<String>,
}

impl SnapshotFilter {
    /// True when no criterion narrows the snapshot.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.departments.is_none() && self.categories.is_none() && self.query.is_none()
    }

    /// Does a single record pass every criterion?
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(ref allowed) = self.departments {
            if !allowed.contains(asset.department()) {
                return false;
            }
        }

        if let Some(ref allowed) = self.categories {
            if !allowed.contains(asset.category.as_str()) {
                return false;
            }
        }

        if let Some(ref query) = self.query {
            if !asset.asset_code.contains(query) && !asset.owner.contains(query) {
                return false;
            }
        }

        true
    }

    /// Narrow a snapshot, preserving store order.
    #[must_use]
    pub fn apply(&self, snapshot: &[Asset]) -> Vec<Asset> {
        snapshot
            .iter()
            .filter(|asset| self.matches(asset))
            .cloned()
            .collect()
    }
}

/// The `n` most recently purchased records.
///
/// Stable sort on `purchase_date` descending, so store order breaks ties.
#[must_use]
pub fn most_recent(snapshot: &[Asset], n: usize) -> Vec<Asset> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
    sorted.truncate(n);
    sorted
}

/// Every department observed in the snapshot, sorted.
#[must_use]
pub fn observed_departments(snapshot: &[Asset]) -> BTreeSet<String> {
    snapshot
        .iter()
        .map(|asset| asset.department().to_string())
        .collect()
}

/// Every category observed in the snapshot, sorted by wire name.
#[must_use]
pub fn observed_categories(snapshot: &[Asset]) -> BTreeSet<String> {
    snapshot
        .iter()
        .map(|asset| asset.category.as_str().to_string())
        .collect()
}

/// Convenience re-export so filter callers see the sentinel next to the API.
pub use crate::model::department::UNASSIGNED;
