//! `stk publish` — move a draft into active reporting.

use clap::Args;
use std::io::Write as _;
use std::path::Path;

use stocktake_core::lifecycle;
use stocktake_core::model::Status;

use crate::cmd::{open_for_write, registry_failure, write_asset_lines};
use crate::output::{OutputMode, render};

/// Arguments for `stk publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Store id of the draft.
    pub id: i64,
}

/// Execute `stk publish`.
///
/// Mechanically a plain transition to `normal`; a non-draft record is
/// published without complaint, it just logs what happened.
pub fn run_publish(
    args: &PublishArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let conn = open_for_write(project_root)?;

    let before = stocktake_core::db::store::get(&conn, args.id)
        .map_err(|e| registry_failure(output, &e))?;
    if before.status != Status::Draft {
        tracing::warn!(id = args.id, status = %before.status, "publishing a non-draft record");
    }

    let asset = lifecycle::publish(&conn, args.id).map_err(|e| registry_failure(output, &e))?;

    render(output, &asset, |asset, w| {
        writeln!(w, "✓ published {} into the active view", asset.asset_code)?;
        write_asset_lines(asset, w)
    })
}

#[cfg(test)]
mod tests {
    use super::PublishArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: PublishArgs,
    }

    #[test]
    fn publish_args_take_a_positional_id() {
        let w = Wrapper::parse_from(["test", "3"]);
        assert_eq!(w.args.id, 3);
    }
}
