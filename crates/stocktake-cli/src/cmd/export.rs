//! `stk export` — filtered CSV export of the visible snapshot.

use anyhow::Context as _;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use stocktake_core::filter::partition_drafts;
use stocktake_report::export::write_csv;

use crate::cmd::{load_snapshot, parse_filter};

/// Arguments for `stk export`.
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output CSV path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only export assets held by this derived department (repeatable).
    #[arg(long = "department")]
    pub departments: Vec<String>,

    /// Only export assets in this category (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Case-sensitive substring match on asset code or owner.
    #[arg(long)]
    pub search: Option<String>,

    /// Include draft records in the export.
    #[arg(long)]
    pub drafts: bool,
}

/// Execute `stk export`.
pub fn run_export(args: &ExportArgs, project_root: &Path) -> anyhow::Result<()> {
    let snapshot = load_snapshot(project_root)?;
    let view = if args.drafts {
        snapshot
    } else {
        partition_drafts(&snapshot).active
    };

    let filter = parse_filter(&args.departments, &args.categories, args.search.as_deref());
    let matched = filter.apply(&view);

    let mut out: Box<dyn Write> = match args.output.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    write_csv(&mut out, &matched).context("write csv export")?;
    out.flush().context("flush csv export")?;

    if let Some(path) = args.output.as_ref() {
        tracing::info!(
            records = matched.len(),
            path = %path.display(),
            "export written"
        );
    }

    Ok(())
}
