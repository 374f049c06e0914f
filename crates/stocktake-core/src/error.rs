//! Typed failure taxonomy for registry operations.
//!
//! Every service-level call returns [`RegistryError`] so callers can branch
//! on the failure class instead of parsing message text. Each variant carries
//! a stable machine code (`E####`) and an optional remediation hint that the
//! CLI surfaces next to the message.

use crate::model::ParseEnumError;

/// Convenience alias used throughout the store and lifecycle layers.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// The failure classes a registry operation can report.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Bad input shape or range. Reported to the caller, never retried.
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    /// Unique-constraint violation on the business key.
    #[error("asset code '{code}' is already registered")]
    DuplicateCode { code: String },

    /// Operation addressed an id that does not exist. Non-fatal.
    #[error("asset {id} not found")]
    NotFound { id: i64 },

    /// The record store is unreachable or failed at the SQLite layer.
    /// Read paths degrade to an empty snapshot; write paths propagate this.
    #[error("record store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
}

impl RegistryError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E1001",
            Self::DuplicateCode { .. } => "E2001",
            Self::NotFound { .. } => "E2002",
            Self::Unavailable(_) => "E5001",
        }
    }

    /// Optional remediation hint surfaced to operators.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => {
                Some("Use a known status/category value and a non-negative price.")
            }
            Self::DuplicateCode { .. } => {
                Some("Pick an unused asset code, or update the existing record instead.")
            }
            Self::NotFound { .. } => None,
            Self::Unavailable(_) => {
                Some("Check that the store file exists and is writable; run `stk init` first.")
            }
        }
    }
}

impl From<ParseEnumError> for RegistryError {
    fn from(err: ParseEnumError) -> Self {
        Self::Validation {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegistryError;
    use std::collections::HashSet;

    #[test]
    fn error_codes_are_unique_and_machine_friendly() {
        let all = [
            RegistryError::Validation {
                reason: "x".into(),
            },
            RegistryError::DuplicateCode { code: "IT-1".into() },
            RegistryError::NotFound { id: 7 },
            RegistryError::Unavailable(rusqlite::Error::InvalidQuery),
        ];

        let mut seen = HashSet::new();
        for err in &all {
            let code = err.error_code();
            assert!(seen.insert(code), "duplicate code {code}");
            assert_eq!(code.len(), 5);
            assert!(code.starts_with('E'));
            assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn not_found_carries_no_suggestion() {
        assert!(RegistryError::NotFound { id: 1 }.suggestion().is_none());
        assert!(
            RegistryError::DuplicateCode { code: "a".into() }
                .suggestion()
                .is_some()
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = RegistryError::DuplicateCode {
            code: "IT-24001".into(),
        };
        assert!(err.to_string().contains("IT-24001"));

        let err = RegistryError::NotFound { id: 42 };
        assert!(err.to_string().contains("42"));
    }
}
