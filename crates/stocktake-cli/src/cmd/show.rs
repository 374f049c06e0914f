//! `stk show` — full details for one asset, derived fields included.

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use stocktake_core::config::store_path;
use stocktake_core::db::{self, store};
use stocktake_core::model::Asset;

use crate::cmd::{registry_failure, write_asset_lines};
use crate::output::{OutputMode, pretty_kv, render};

/// Arguments for `stk show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Store id of the asset.
    pub id: i64,
}

#[derive(Debug, Serialize)]
struct ShowPayload {
    #[serde(flatten)]
    asset: Asset,
    department: String,
    years_old: f64,
}

/// Execute `stk show`.
pub fn run_show(args: &ShowArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let conn = db::open_store(&store_path(project_root))?;
    let asset = store::get(&conn, args.id).map_err(|e| registry_failure(output, &e))?;

    let today = Utc::now().date_naive();
    let payload = ShowPayload {
        department: asset.department().to_string(),
        years_old: asset.years_old(today),
        asset,
    };

    render(output, &payload, |payload, w| {
        write_asset_lines(&payload.asset, w)?;
        pretty_kv(w, "department", &payload.department)?;
        pretty_kv(w, "age", format!("{:.1} years", payload.years_old))?;
        Ok(())
    })
}
