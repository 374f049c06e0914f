use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{RegistryError, Result};

/// The five asset categories tracked by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ItDevice,
    Furniture,
    Software,
    Vehicle,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::ItDevice,
        Self::Furniture,
        Self::Software,
        Self::Vehicle,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItDevice => "it_device",
            Self::Furniture => "furniture",
            Self::Software => "software",
            Self::Vehicle => "vehicle",
            Self::Other => "other",
        }
    }
}

/// The eight lifecycle states.
///
/// Transitions are unrestricted point-to-point: this is a flat status field,
/// not an ordered machine. What the lifecycle service does enforce is the
/// owner-clearing side effect, keyed off [`Status::clears_owner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Normal,
    InRepair,
    ReturnedResigned,
    Disposed,
    Sold,
    Lost,
    InStorage,
    Draft,
}

impl Status {
    /// All states, in display order.
    pub const ALL: [Self; 8] = [
        Self::Normal,
        Self::InRepair,
        Self::ReturnedResigned,
        Self::Disposed,
        Self::Sold,
        Self::Lost,
        Self::InStorage,
        Self::Draft,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::InRepair => "in_repair",
            Self::ReturnedResigned => "returned_resigned",
            Self::Disposed => "disposed",
            Self::Sold => "sold",
            Self::Lost => "lost",
            Self::InStorage => "in_storage",
            Self::Draft => "draft",
        }
    }

    /// States that release the asset from its holder: entering one of these
    /// clears `owner` to the empty string in the same atomic update.
    #[must_use]
    pub const fn clears_owner(self) -> bool {
        matches!(
            self,
            Self::ReturnedResigned | Self::Disposed | Self::Sold | Self::Lost | Self::InStorage
        )
    }

    /// Draft records are provisional and excluded from active views.
    #[must_use]
    pub const fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "it_device" | "it-device" | "it" => Ok(Self::ItDevice),
            "furniture" => Ok(Self::Furniture),
            "software" | "sw" => Ok(Self::Software),
            "vehicle" | "car" => Ok(Self::Vehicle),
            "other" | "etc" => Ok(Self::Other),
            _ => Err(ParseEnumError {
                expected: "category",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "normal" => Ok(Self::Normal),
            "in_repair" | "in-repair" | "repair" => Ok(Self::InRepair),
            "returned_resigned" | "returned-resigned" | "returned" => Ok(Self::ReturnedResigned),
            "disposed" => Ok(Self::Disposed),
            "sold" => Ok(Self::Sold),
            "lost" => Ok(Self::Lost),
            "in_storage" | "in-storage" | "storage" => Ok(Self::InStorage),
            "draft" => Ok(Self::Draft),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}

/// A persisted asset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Store-assigned rowid. Immutable.
    pub id: i64,
    /// Unique business key, e.g. `IT-24001`.
    pub asset_code: String,
    pub name: String,
    pub category: Category,
    pub status: Status,
    /// Free-text holder; empty string means unassigned.
    pub owner: String,
    pub purchase_date: NaiveDate,
    /// Price in whole currency units (KRW). Never negative.
    pub price: i64,
    /// Store-assigned insertion timestamp, microseconds since epoch.
    pub created_at_us: i64,
}

impl Asset {
    /// Fractional age in years relative to `today`.
    ///
    /// A future purchase date yields a negative age; callers treat that as
    /// data entry noise, not an error.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn years_old(&self, today: NaiveDate) -> f64 {
        (today - self.purchase_date).num_days() as f64 / 365.0
    }

    /// Derived grouping key parsed from the owner field.
    #[must_use]
    pub fn department(&self) -> &str {
        super::department::derive(&self.owner)
    }
}

/// Caller-supplied fields for registration and full-record edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub asset_code: String,
    pub name: String,
    pub category: Category,
    pub owner: String,
    pub purchase_date: NaiveDate,
    pub price: i64,
    /// Initial lifecycle state. Defaults to `normal`; `draft` marks a
    /// provisional entry excluded from active views until published.
    #[serde(default)]
    pub status: Status,
}

impl NewAsset {
    /// Check required fields and ranges before touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] on a blank asset code or name,
    /// or a negative price.
    pub fn validate(&self) -> Result<()> {
        if self.asset_code.trim().is_empty() {
            return Err(RegistryError::Validation {
                reason: "asset_code must not be blank".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(RegistryError::Validation {
                reason: "name must not be blank".into(),
            });
        }
        if self.price < 0 {
            return Err(RegistryError::Validation {
                reason: format!("price must be non-negative, got {}", self.price),
            });
        }
        Ok(())
    }
}
