//! `stk dashboard` — KPI cards, department rollups, recents, and insights.
//!
//! This is the CLI rendition of the web dashboard: filter the active
//! snapshot, compute the derived report, and print it. When the store is
//! unavailable the command still succeeds over an empty snapshot.

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use stocktake_core::config::load_project_config;
use stocktake_core::filter::partition_drafts;
use stocktake_core::model::{Asset, Status};
use stocktake_report::currency::format_currency;
use stocktake_report::department::{DepartmentStat, department_totals};
use stocktake_report::insight::{Insight, build_insights};
use stocktake_report::kpi::{Bucket, KpiSummary};

use crate::cmd::{load_snapshot, parse_filter, write_asset_header, write_asset_row};
use crate::output::{OutputMode, pretty_section, render};

/// Arguments for `stk dashboard`.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Only include assets held by this derived department (repeatable).
    #[arg(long = "department")]
    pub departments: Vec<String>,

    /// Only include assets in this category (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Case-sensitive substring match on asset code or owner.
    #[arg(long)]
    pub search: Option<String>,
}

/// Report payload for `stk dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    summary: KpiSummary,
    departments: Vec<DepartmentStat>,
    recent: Vec<Asset>,
    insights: Vec<Insight>,
    draft_count: usize,
}

/// Execute `stk dashboard`.
pub fn run_dashboard(
    args: &DashboardArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let config = load_project_config(project_root)?.report;
    let snapshot = load_snapshot(project_root)?;
    let partition = partition_drafts(&snapshot);

    let filter = parse_filter(&args.departments, &args.categories, args.search.as_deref());
    let view = filter.apply(&partition.active);

    let today = Utc::now().date_naive();
    let report = DashboardReport {
        summary: KpiSummary::compute(&view, today, &config),
        departments: department_totals(&view),
        recent: stocktake_core::filter::most_recent(&view, config.recent_limit),
        insights: build_insights(&view, &config),
        draft_count: partition.drafts.len(),
    };

    render(output, &report, render_dashboard_human)
}

fn card(w: &mut dyn Write, label: &str, bucket: Bucket) -> std::io::Result<()> {
    writeln!(
        w,
        "  {:<16} {:>4} item(s)   {}",
        label,
        bucket.count,
        format_currency(bucket.value)
    )
}

fn render_dashboard_human(report: &DashboardReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Asset dashboard")?;

    writeln!(
        w,
        "  {:<16} {:>4} item(s)   total {}   avg {}",
        "Assets",
        report.summary.total_count,
        format_currency(report.summary.total_value),
        format_currency(report.summary.average_price),
    )?;
    card(w, "In repair", report.summary.status_bucket(Status::InRepair))?;
    card(
        w,
        "Returned",
        report.summary.status_bucket(Status::ReturnedResigned),
    )?;
    card(w, "Replacement due", report.summary.replacement)?;
    if report.draft_count > 0 {
        writeln!(w, "  {:<16} {:>4} item(s)", "Drafts (hidden)", report.draft_count)?;
    }

    writeln!(w)?;
    pretty_section(w, "Departments by value")?;
    if report.departments.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for stat in &report.departments {
        writeln!(
            w,
            "  {:<20} {:>4} item(s)   {}",
            stat.department,
            stat.count,
            format_currency(stat.total_value)
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Recently purchased")?;
    if report.recent.is_empty() {
        writeln!(w, "  (none)")?;
    } else {
        write_asset_header(w)?;
        for asset in &report.recent {
            write_asset_row(asset, w)?;
        }
    }

    writeln!(w)?;
    pretty_section(w, "Insights")?;
    for insight in &report.insights {
        writeln!(w, "  - {}", insight.message)?;
    }

    Ok(())
}
