//! SQLite asset store utilities.
//!
//! Runtime defaults are intentionally conservative:
//! - `journal_mode = WAL` to allow concurrent readers while a writer commits
//! - `busy_timeout = 5s` to reduce transient lock failures under contention
//! - `foreign_keys = ON` kept on even though the current schema is a single
//!   table, so future edge tables inherit integrity checks

pub mod migrations;
pub mod schema;
pub mod store;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::{path::Path, time::Duration};

/// Busy timeout used for store connections.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (or create) the asset store, apply runtime pragmas, and migrate
/// schema to the latest version.
///
/// # Errors
///
/// Returns an error if opening/configuring/migrating the database fails.
pub fn open_store(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create store directory {}", parent.display()))?;
    }

    let mut conn = Connection::open(path)
        .with_context(|| format!("open asset store {}", path.display()))?;

    configure_connection(&conn).context("configure sqlite pragmas")?;
    migrations::migrate(&mut conn).context("apply store migrations")?;

    Ok(conn)
}

/// Attempt to open an existing store with graceful recovery.
///
/// A missing or corrupt database file yields `Ok(None)` instead of an error,
/// so read-only callers (the dashboard, exports) can degrade to an empty
/// snapshot rather than crash. Mutating callers should use [`open_store`].
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures (not missing/corrupt DB).
pub fn try_open_store(path: &Path) -> Result<Option<Connection>> {
    if !path.exists() {
        return Ok(None);
    }

    match open_store(path) {
        Ok(conn) => {
            // Quick integrity check: store_meta must be readable.
            let meta: rusqlite::Result<i64> =
                conn.query_row("SELECT schema_version FROM store_meta WHERE id = 1", [], |row| {
                    row.get(0)
                });
            if meta.is_ok() {
                Ok(Some(conn))
            } else {
                tracing::warn!(path = %path.display(), "asset store corrupt, degrading to empty snapshot");
                Ok(None)
            }
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to open asset store, degrading to empty snapshot"
            );
            Ok(None)
        }
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    let _journal_mode: String =
        conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BUSY_TIMEOUT, open_store, try_open_store};
    use crate::db::migrations;
    use tempfile::TempDir;

    fn temp_db_path() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("assets.sqlite3");
        (dir, path)
    }

    #[test]
    fn open_store_sets_wal_busy_timeout_and_fk() {
        let (_dir, path) = temp_db_path();
        let conn = open_store(&path).expect("open store");

        let journal_mode: String = conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .expect("query journal_mode");
        assert_eq!(journal_mode.to_ascii_lowercase(), "wal");

        let busy_timeout_ms: u64 = conn
            .pragma_query_value(None, "busy_timeout", |row| row.get(0))
            .expect("query busy_timeout");
        assert_eq!(
            u128::from(busy_timeout_ms),
            DEFAULT_BUSY_TIMEOUT.as_millis()
        );

        let foreign_keys: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .expect("query foreign_keys");
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn open_store_runs_migrations() {
        let (_dir, path) = temp_db_path();
        let conn = open_store(&path).expect("open store");

        let version = migrations::current_schema_version(&conn).expect("schema version query");
        assert_eq!(version, migrations::LATEST_SCHEMA_VERSION);
    }

    #[test]
    fn try_open_store_missing_file() {
        let (_dir, path) = temp_db_path();
        let result = try_open_store(&path).expect("try open");
        assert!(result.is_none());
    }

    #[test]
    fn try_open_store_valid_file() {
        let (_dir, path) = temp_db_path();
        drop(open_store(&path).expect("create store"));

        let conn = try_open_store(&path).expect("try open");
        assert!(conn.is_some());
    }

    #[test]
    fn try_open_store_corrupt_file() {
        let (_dir, path) = temp_db_path();
        std::fs::write(&path, b"this is not a sqlite database").expect("write junk");

        let result = try_open_store(&path).expect("try open");
        assert!(result.is_none());
    }
}
