//! Rule-based textual insights over an active snapshot.
//!
//! Rules run in a fixed order and are independently triggerable; the only
//! short circuit is the empty-snapshot message, and the no-anomalies
//! fallback fires only when nothing else did.

use serde::Serialize;

use stocktake_core::config::ReportConfig;
use stocktake_core::model::Asset;

use crate::currency::format_currency_compact;
use crate::kpi::issue_ratio;

/// Which rule produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Empty snapshot; nothing to analyze.
    NoData,
    /// High-value records concentrate a notable share of book value.
    HighValue,
    /// Non-normal ratio above the warn bracket.
    HealthWarning,
    /// Non-normal ratio above the watch bracket but under warn.
    Watch,
    /// No rule fired.
    NoAnomalies,
}

/// One rendered insight line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Run every rule against the snapshot.
#[must_use]
pub fn build_insights(snapshot: &[Asset], config: &ReportConfig) -> Vec<Insight> {
    if snapshot.is_empty() {
        return vec![Insight::new(
            InsightKind::NoData,
            "no asset records to analyze",
        )];
    }

    let mut insights = Vec::new();

    let high_value: Vec<&Asset> = snapshot
        .iter()
        .filter(|a| a.price >= config.high_value_threshold)
        .collect();
    if !high_value.is_empty() {
        let total: i64 = high_value.iter().map(|a| a.price).sum();
        insights.push(Insight::new(
            InsightKind::HighValue,
            format!(
                "{} high-value asset(s) concentrate {} of book value",
                high_value.len(),
                format_currency_compact(total)
            ),
        ));
    }

    let ratio = issue_ratio(snapshot);
    if ratio > config.issue_warn_ratio {
        insights.push(Insight::new(
            InsightKind::HealthWarning,
            format!(
                "{:.1}% of assets are outside normal status; review fleet health",
                ratio * 100.0
            ),
        ));
    } else if ratio > config.issue_watch_ratio {
        insights.push(Insight::new(
            InsightKind::Watch,
            format!(
                "{:.1}% of assets are outside normal status; worth watching",
                ratio * 100.0
            ),
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::NoAnomalies,
            "no anomalies detected in the current snapshot",
        ));
    }

    insights
}
