//! `stk update` — full-field edit of an existing asset.

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

/// Arguments for `stk update`.
///
/// This is a whole-record replace: every caller-editable field is supplied
/// again. The lifecycle status is not part of a full edit; use `stk status`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Store id of the asset to edit.
    pub id: i64,

    /// Unique asset management code.
    #[arg(long)]
    pub code: String,

    /// Human-readable asset name.
    #[arg(long)]
    pub name: String,

    /// Category: it_device, furniture, software, vehicle, or other.
    #[arg(long)]
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
}

/// Execute `stk update`.
pub fn run_update(args: &UpdateArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let category = Category::from_str(&args.category)
        .map_err(|e| registry_failure(output, &RegistryError::from(e)))?;

    let fields = NewAsset {
        asset_code: args.code.clone(),
        name: args.name.clone(),
        category,
        owner: args.owner.clone(),
        purchase_date: args.purchased,
        price: args.price,
        status: Status::default(),
    };

    let conn = open_for_write(project_root)?;
    let asset = store::update(&conn, args.id, &fields).map_err(|e| registry_failure(output, &e))?;

    render(output, &asset, |asset, w| {
        writeln!(w, "✓ updated {} (id {})", asset.asset_code, asset.id)?;
        write_asset_lines(asset, w)
    })
}
