//! `stk delete` — remove an asset record.

use clap::Args;
use serde::Serialize;
use std::io::Write as _;
use std::path::Path;

use stocktake_core::db::store;

use crate::cmd::{open_for_write, registry_failure};
use crate::output::{OutputMode, render};

/// Arguments for `stk delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Store id of the asset to remove.
    pub id: i64,
}

#[derive(Debug, Serialize)]
struct DeleteAck {
    ok: bool,
    deleted: i64,
}

/// Execute `stk delete`.
pub fn run_delete(args: &DeleteArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let conn = open_for_write(project_root)?;
    store::delete(&conn, args.id).map_err(|e| registry_failure(output, &e))?;

    let ack = DeleteAck {
        ok: true,
        deleted: args.id,
    };
    render(output, &ack, |ack, w| {
        writeln!(w, "✓ asset {} deleted", ack.deleted)
    })
}

#[cfg(test)]
mod tests {
    use super::DeleteArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: DeleteArgs,
    }

    #[test]
    fn delete_args_take_a_positional_id() {
        let w = Wrapper::parse_from(["test", "9"]);
        assert_eq!(w.args.id, 9);
    }
}
