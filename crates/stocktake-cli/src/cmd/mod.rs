//! Command handlers for the `stk` binary.

pub mod completions;
pub mod dashboard;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod publish;
pub mod register;
pub mod seed;
pub mod show;
pub mod status;
pub mod update;

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use stocktake_core::config::store_path;
use stocktake_core::db::{self, store};
use stocktake_core::error::RegistryError;
use stocktake_core::filter::SnapshotFilter;
use stocktake_core::model::Asset;
use stocktake_report::currency::group_thousands;

use crate::output::{CliError, OutputMode, pretty_kv, render_error};

/// Render a typed registry failure to stderr and convert it into the
/// process-level error that sets the exit code.
pub(crate) fn registry_failure(output: OutputMode, err: &RegistryError) -> anyhow::Error {
    let _ = render_error(output, &CliError::from(err));
    anyhow::anyhow!("{err}")
}

/// Open the store for a mutating command, creating it on first use.
pub(crate) fn open_for_write(project_root: &Path) -> anyhow::Result<rusqlite::Connection> {
    db::open_store(&store_path(project_root))
}

/// Read the full snapshot for a reporting command.
///
/// A missing or corrupt store degrades to an empty snapshot instead of
/// failing, per the dashboard's read-only fallback behavior.
pub(crate) fn load_snapshot(project_root: &Path) -> anyhow::Result<Vec<Asset>> {
    match db::try_open_store(&store_path(project_root))? {
        Some(conn) => Ok(store::snapshot(&conn)?),
        None => {
            tracing::warn!("asset store unavailable; reporting over an empty snapshot");
            Ok(Vec::new())
        }
    }
}

/// Build the compound filter from repeated CLI flags.
///
/// Zero occurrences of a flag means the criterion is unset (include all);
/// this is distinct from an empty allowed set, which the library layer
/// supports but a flag cannot express.
pub(crate) fn parse_filter(
    departments: &[String],
    categories: &[String],
    search: Option<&str>,
) -> SnapshotFilter {
    let to_set = |values: &[String]| -> Option<BTreeSet<String>> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().cloned().collect())
        }
    };

    SnapshotFilter {
        departments: to_set(departments),
        categories: to_set(categories),
        query: search.map(str::to_string),
    }
}

/// Key/value detail block shared by register/show/status/update output.
pub(crate) fn write_asset_lines(asset: &Asset, w: &mut dyn Write) -> io::Result<()> {
    pretty_kv(w, "id", asset.id.to_string())?;
    pretty_kv(w, "code", &asset.asset_code)?;
    pretty_kv(w, "name", &asset.name)?;
    pretty_kv(w, "category", asset.category.as_str())?;
    pretty_kv(w, "status", asset.status.as_str())?;
    pretty_kv(
        w,
        "owner",
        if asset.owner.is_empty() {
            "(unassigned)"
        } else {
            asset.owner.as_str()
        },
    )?;
    pretty_kv(w, "purchased", asset.purchase_date.to_string())?;
    pretty_kv(w, "price", format!("{} 원", group_thousands(asset.price)))?;
    Ok(())
}

/// One row of the list/search table.
pub(crate) fn write_asset_row(asset: &Asset, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<5} {:<10} {:<28} {:<10} {:<18} {:<20} {:<11} {:>14}",
        asset.id,
        asset.asset_code,
        truncate(&asset.name, 28),
        asset.category.as_str(),
        asset.status.as_str(),
        truncate(asset.department(), 20),
        asset.purchase_date.to_string(),
        group_thousands(asset.price),
    )
}

pub(crate) fn write_asset_header(w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<5} {:<10} {:<28} {:<10} {:<18} {:<20} {:<11} {:>14}",
        "ID", "CODE", "NAME", "CATEGORY", "STATUS", "DEPARTMENT", "PURCHASED", "PRICE"
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
