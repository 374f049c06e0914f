//! Full reporting pass over a mixed snapshot: partition, filter, KPIs,
//! department rollup, insights, and export, the way the dashboard composes
//! them.

use chrono::NaiveDate;
use stocktake_core::config::ReportConfig;
use stocktake_core::filter::{SnapshotFilter, most_recent, partition_drafts};
use stocktake_core::model::{Asset, Category, Status};
use stocktake_report::department::department_totals;
use stocktake_report::export::to_csv_string;
use stocktake_report::insight::{InsightKind, build_insights};
use stocktake_report::kpi::KpiSummary;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn asset(
    id: i64,
    code: &str,
    category: Category,
    status: Status,
    owner: &str,
    price: i64,
    purchased: NaiveDate,
) -> Asset {
    Asset {
        id,
        asset_code: code.into(),
        name: format!("{code} unit"),
        category,
        status,
        owner: owner.into(),
        purchase_date: purchased,
        price,
        created_at_us: id,
    }
}

fn fleet() -> Vec<Asset> {
    vec![
        asset(
            1,
            "IT-22001",
            Category::ItDevice,
            Status::Normal,
            "영업1팀 김철수",
            3_500_000,
            date(2022, 3, 1),
        ),
        asset(
            2,
            "IT-24001",
            Category::ItDevice,
            Status::Normal,
            "개발1팀 박민수",
            2_800_000,
            date(2024, 6, 1),
        ),
        asset(
            3,
            "CAR-23001",
            Category::Vehicle,
            Status::InRepair,
            "재무팀 윤준호",
            60_000_000,
            date(2023, 9, 1),
        ),
        asset(
            4,
            "FUR-21001",
            Category::Furniture,
            Status::InStorage,
            "",
            800_000,
            date(2021, 1, 10),
        ),
        asset(
            5,
            "SW-24001",
            Category::Software,
            Status::Draft,
            "",
            700_000,
            date(2024, 7, 1),
        ),
    ]
}

fn today() -> NaiveDate {
    date(2026, 8, 7)
}

#[test]
fn dashboard_composition_over_a_mixed_fleet() {
    let config = ReportConfig::default();
    let partition = partition_drafts(&fleet());

    // The draft stays out of every aggregate below.
    assert_eq!(partition.active.len(), 4);
    assert_eq!(partition.drafts.len(), 1);

    let summary = KpiSummary::compute(&partition.active, today(), &config);
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.total_value, 67_100_000);
    assert_eq!(summary.average_price, 16_775_000);
    // The 2022 laptop is the only old-but-normal record.
    assert_eq!(summary.replacement.count, 1);
    assert_eq!(summary.replacement.value, 3_500_000);

    let departments = department_totals(&partition.active);
    assert_eq!(departments[0].department, "재무팀");
    assert_eq!(departments[0].total_value, 60_000_000);

    // 2 of 4 active records are outside normal: warning bracket, plus the
    // vehicle trips the high-value rule.
    let insights = build_insights(&partition.active, &config);
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![InsightKind::HighValue, InsightKind::HealthWarning]);

    let recent = most_recent(&partition.active, 2);
    assert_eq!(recent[0].asset_code, "IT-24001");
    assert_eq!(recent[1].asset_code, "CAR-23001");
}

#[test]
fn filtered_export_carries_only_matching_rows() {
    let partition = partition_drafts(&fleet());
    let filter = SnapshotFilter {
        categories: Some(std::iter::once("it_device".to_string()).collect()),
        ..Default::default()
    };

    let view = filter.apply(&partition.active);
    assert_eq!(view.len(), 2);

    let csv = to_csv_string(&view);
    assert_eq!(csv.lines().count(), 3, "header plus two records");
    assert!(csv.contains("IT-22001"));
    assert!(csv.contains("김철수"));
    assert!(!csv.contains("CAR-23001"));
}

#[test]
fn degraded_snapshot_renders_an_empty_report_without_panicking() {
    let config = ReportConfig::default();
    let empty: Vec<Asset> = Vec::new();

    let summary = KpiSummary::compute(&empty, today(), &config);
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.average_price, 0);

    let insights = build_insights(&empty, &config);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::NoData);

    assert!(department_totals(&empty).is_empty());
    assert!(most_recent(&empty, 5).is_empty());
}
