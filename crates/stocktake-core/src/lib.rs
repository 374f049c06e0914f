//! stocktake-core: data model, record store, and lifecycle service.
//!
//! The crate is organized leaf-first:
//! - [`model`]: the `Asset` record, its closed `Status`/`Category` enums,
//!   and the department derivation rule
//! - [`error`]: the typed failure taxonomy shared by every service call
//! - [`db`]: SQLite store with schema, migrations, and CRUD operations
//! - [`lifecycle`]: the status state machine and its owner-clearing side
//!   effect
//! - [`filter`]: pure snapshot partitioning, compound filters, and search
//! - [`config`]: project configuration loaded from `.stocktake/config.toml`

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod model;
