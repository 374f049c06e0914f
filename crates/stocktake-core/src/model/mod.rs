//! The asset record and its closed vocabulary.

pub mod asset;
pub mod department;

pub use asset::{Asset, Category, NewAsset, ParseEnumError, Status};
