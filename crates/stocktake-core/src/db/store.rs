//! CRUD operations over the `assets` table.
//!
//! Every function takes a shared `&Connection` and returns typed records
//! (never raw rows). Each mutation is a single SQL statement, so writes are
//! atomic and immediately visible to subsequent reads on the connection.

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, params, types::Type};
use std::str::FromStr;

use crate::error::{RegistryError, Result};
use crate::model::{Asset, Category, NewAsset, Status};

const ASSET_COLUMNS: &str =
    "id, asset_code, name, category, status, owner, purchase_date, price, created_at_us";

/// Insert a new asset and return the stored record.
///
/// The initial status comes from `new.status` (`normal` unless the caller
/// registers a draft). `created_at_us` is assigned here, not by the caller.
///
/// # Errors
///
/// `Validation` on bad fields, `DuplicateCode` when the asset code is
/// already registered, `Unavailable` on store failures.
pub fn insert(conn: &Connection, new: &NewAsset) -> Result<Asset> {
    new.validate()?;

    let created_at_us = Utc::now().timestamp_micros();
    conn.execute(
        "INSERT INTO assets (
            asset_code, name, category, status, owner,
            purchase_date, price, created_at_us
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            new.asset_code,
            new.name,
            new.category.as_str(),
            new.status.as_str(),
            new.owner,
            format_date(new.purchase_date),
            new.price,
            created_at_us
        ],
    )
    .map_err(|e| map_code_conflict(&new.asset_code, e))?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, code = %new.asset_code, status = %new.status, "asset registered");
    get(conn, id)
}

/// Fetch a single asset by id.
///
/// # Errors
///
/// `NotFound` when the id does not exist.
pub fn get(conn: &Connection, id: i64) -> Result<Asset> {
    let sql = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = ?1");
    match conn.query_row(&sql, params![id], row_to_asset) {
        Ok(asset) => Ok(asset),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(RegistryError::NotFound { id }),
        Err(e) => Err(e.into()),
    }
}

/// List assets in stable store order (`id ASC`) with offset/limit paging.
///
/// `limit = None` means unbounded.
///
/// # Errors
///
/// Returns `Unavailable` if the query fails.
pub fn list(conn: &Connection, offset: u32, limit: Option<u32>) -> Result<Vec<Asset>> {
    let sql = format!(
        "SELECT {ASSET_COLUMNS} FROM assets ORDER BY id ASC LIMIT ?1 OFFSET ?2"
    );
    let limit = limit.map_or(-1_i64, i64::from);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![limit, i64::from(offset)], row_to_asset)?;

    let mut assets = Vec::new();
    for row in rows {
        assets.push(row?);
    }
    Ok(assets)
}

/// Full ordered read used as the input snapshot for filtering and reports.
///
/// # Errors
///
/// Returns `Unavailable` if the query fails.
pub fn snapshot(conn: &Connection) -> Result<Vec<Asset>> {
    list(conn, 0, None)
}

/// Replace every caller-editable field of an existing asset.
///
/// `id`, `status`, and `created_at_us` are not touched by a full edit;
/// status changes go through the lifecycle service.
///
/// # Errors
///
/// `NotFound` on an absent id, `DuplicateCode` if the new code collides,
/// `Validation` on bad fields.
pub fn update(conn: &Connection, id: i64, fields: &NewAsset) -> Result<Asset> {
    fields.validate()?;

    let changed = conn
        .execute(
            "UPDATE assets
             SET asset_code = ?1, name = ?2, category = ?3, owner = ?4,
                 purchase_date = ?5, price = ?6
             WHERE id = ?7",
            params![
                fields.asset_code,
                fields.name,
                fields.category.as_str(),
                fields.owner,
                format_date(fields.purchase_date),
                fields.price,
                id
            ],
        )
        .map_err(|e| map_code_conflict(&fields.asset_code, e))?;

    if changed == 0 {
        return Err(RegistryError::NotFound { id });
    }
    get(conn, id)
}

/// Delete an asset. Hard delete; there is no recycle bin.
///
/// # Errors
///
/// `NotFound` on an absent id.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM assets WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(RegistryError::NotFound { id });
    }
    tracing::debug!(id, "asset deleted");
    Ok(())
}

/// Count all records, drafts included.
///
/// # Errors
///
/// Returns `Unavailable` if the query fails.
pub fn count(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM assets", [], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or(0))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Map a unique-index violation on `asset_code` to `DuplicateCode`;
/// everything else stays a store failure.
fn map_code_conflict(code: &str, err: rusqlite::Error) -> RegistryError {
    match &err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
                && msg.contains("asset_code") =>
        {
            RegistryError::DuplicateCode {
                code: code.to_string(),
            }
        }
        _ => err.into(),
    }
}

fn row_to_asset(row: &rusqlite::Row<'_>) -> rusqlite::Result<Asset> {
    let category: String = row.get(3)?;
    let status: String = row.get(4)?;
    let purchase_date: String = row.get(6)?;

    Ok(Asset {
        id: row.get(0)?,
        asset_code: row.get(1)?,
        name: row.get(2)?,
        category: Category::from_str(&category)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        status: Status::from_str(&status)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
        owner: row.get(5)?,
        purchase_date: NaiveDate::parse_from_str(&purchase_date, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?,
        price: row.get(7)?,
        created_at_us: row.get(8)?,
    })
}
