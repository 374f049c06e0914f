//! `stk list` — list and search asset records.

use clap::Args;
use serde::Serialize;
use std::io::Write as _;
use std::path::Path;

use stocktake_core::filter::partition_drafts;
use stocktake_core::model::Asset;

use crate::cmd::{load_snapshot, parse_filter, write_asset_header, write_asset_row};
use crate::output::{OutputMode, render};

/// Arguments for `stk list`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show assets held by this derived department (repeatable).
    #[arg(long = "department")]
    pub departments: Vec<String>,

    /// Only show assets in this category (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Case-sensitive substring match on asset code or owner.
    #[arg(long)]
    pub search: Option<String>,

    /// Show the drafts partition instead of the active view.
    #[arg(long)]
    pub drafts: bool,

    /// Skip the first N matching records.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of records to print.
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ListPayload {
    count: usize,
    assets: Vec<Asset>,
}

/// Execute `stk list`.
pub fn run_list(args: &ListArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let snapshot = load_snapshot(project_root)?;
    let partition = partition_drafts(&snapshot);
    let view = if args.drafts {
        partition.drafts
    } else {
        partition.active
    };

    let filter = parse_filter(&args.departments, &args.categories, args.search.as_deref());
    let mut matched = filter.apply(&view);

    let offset = args.offset as usize;
    if offset > 0 {
        matched = matched.split_off(matched.len().min(offset));
    }
    if let Some(limit) = args.limit {
        matched.truncate(limit as usize);
    }

    let payload = ListPayload {
        count: matched.len(),
        assets: matched,
    };

    render(output, &payload, |payload, w| {
        if payload.assets.is_empty() {
            writeln!(w, "no matching assets")?;
            return Ok(());
        }
        write_asset_header(w)?;
        for asset in &payload.assets {
            write_asset_row(asset, w)?;
        }
        writeln!(w, "{} asset(s)", payload.count)
    })
}

#[cfg(test)]
mod tests {
    use super::ListArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ListArgs,
    }

    #[test]
    fn list_args_default_to_the_unfiltered_active_view() {
        let w = Wrapper::parse_from(["test"]);
        assert!(w.args.departments.is_empty());
        assert!(w.args.categories.is_empty());
        assert!(w.args.search.is_none());
        assert!(!w.args.drafts);
        assert_eq!(w.args.offset, 0);
        assert!(w.args.limit.is_none());
    }

    #[test]
    fn list_args_collect_repeated_filters() {
        let w = Wrapper::parse_from([
            "test",
            "--department",
            "영업1팀",
            "--department",
            "재무팀",
            "--category",
            "vehicle",
            "--search",
            "CAR-",
            "--limit",
            "10",
        ]);
        assert_eq!(w.args.departments.len(), 2);
        assert_eq!(w.args.categories, vec!["vehicle".to_string()]);
        assert_eq!(w.args.search.as_deref(), Some("CAR-"));
        assert_eq!(w.args.limit, Some(10));
    }
}
