//! `stk register` — add a new asset record.

use chrono::NaiveDate;
use clap::Args;
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;

use stocktake_core::db::store;
use stocktake_core::error::RegistryError;
use stocktake_core::model::{Category, NewAsset, Status};

use crate::cmd::{open_for_write, registry_failure, write_asset_lines};
use crate::output::{OutputMode, render};

/// Arguments for `stk register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Unique asset management code, e.g. IT-24001.
    #[arg(long)]
    pub code: String,

    /// Human-readable asset name.
    #[arg(long)]
    pub name: String,

    /// Category: it_device, furniture, software, vehicle, or other.
    #[arg(long, default_value = "it_device")]
    pub category: String,

    /// Holder, recorded as "<department> <person>". Empty means unassigned.
    #[arg(long, default_value = "")]
    pub owner: String,

    /// Purchase date (YYYY-MM-DD).
    #[arg(long)]
    pub purchased: NaiveDate,

    /// Purchase price in won.
    #[arg(long)]
    pub price: i64,

    /// Register as a draft, excluded from active views until published.
    #[arg(long)]
    pub draft: bool,
}

/// Execute `stk register`.
pub fn run_register(
    args: &RegisterArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let category = Category::from_str(&args.category)
        .map_err(|e| registry_failure(output, &RegistryError::from(e)))?;

    let fields = NewAsset {
        asset_code: args.code.clone(),
        name: args.name.clone(),
        category,
        owner: args.owner.clone(),
        purchase_date: args.purchased,
        price: args.price,
        status: if args.draft {
            Status::Draft
        } else {
            Status::Normal
        },
    };

    let conn = open_for_write(project_root)?;
    let asset = store::insert(&conn, &fields).map_err(|e| registry_failure(output, &e))?;

    render(output, &asset, |asset, w| {
        writeln!(w, "✓ registered {} (id {})", asset.asset_code, asset.id)?;
        write_asset_lines(asset, w)
    })
}
