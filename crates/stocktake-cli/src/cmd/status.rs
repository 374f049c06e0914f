//! `stk status` — transition an asset through the lifecycle.

use clap::Args;
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;

use stocktake_core::error::RegistryError;
use stocktake_core::lifecycle;
use stocktake_core::model::Status;

use crate::cmd::{open_for_write, registry_failure, write_asset_lines};
use crate::output::{OutputMode, render};

/// Arguments for `stk status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Store id of the asset.
    pub id: i64,

    /// New status: normal, in_repair, returned_resigned, disposed, sold,
    /// lost, in_storage, or draft.
    pub status: String,
}

/// Execute `stk status`.
pub fn run_status(args: &StatusArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let next = Status::from_str(&args.status)
        .map_err(|e| registry_failure(output, &RegistryError::from(e)))?;

    let conn = open_for_write(project_root)?;
    let asset = lifecycle::transition(&conn, args.id, next)
        .map_err(|e| registry_failure(output, &e))?;

    render(output, &asset, |asset, w| {
        if asset.status.clears_owner() {
            writeln!(w, "✓ status set to {}; owner cleared", asset.status)?;
        } else {
            writeln!(w, "✓ status set to {}", asset.status)?;
        }
        write_asset_lines(asset, w)
    })
}

#[cfg(test)]
mod tests {
    use super::StatusArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: StatusArgs,
    }

    #[test]
    fn status_args_take_id_then_status() {
        let w = Wrapper::parse_from(["test", "7", "lost"]);
        assert_eq!(w.args.id, 7);
        assert_eq!(w.args.status, "lost");
    }
}
