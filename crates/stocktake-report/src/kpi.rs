//! Aggregate KPIs over an active snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use stocktake_core::config::ReportConfig;
use stocktake_core::model::{Asset, Status};

/// A count/value pair for one slice of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Bucket {
    pub count: usize,
    pub value: i64,
}

impl Bucket {
    fn add(&mut self, price: i64) {
        self.count += 1;
        self.value += price;
    }
}

/// Count/value for one lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub status: Status,
    pub count: usize,
    pub value: i64,
}

/// The dashboard's headline numbers, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    pub total_count: usize,
    /// Sum of prices across the snapshot.
    pub total_value: i64,
    /// `total_value / total_count`, zero for an empty snapshot.
    pub average_price: i64,
    /// One entry per lifecycle state, in display order, zeros included.
    pub by_status: Vec<StatusBreakdown>,
    /// Normal-status assets at or past the replacement age.
    pub replacement: Bucket,
}

impl KpiSummary {
    /// Compute the summary for an (already draft-free) snapshot.
    #[must_use]
    pub fn compute(snapshot: &[Asset], today: NaiveDate, config: &ReportConfig) -> Self {
        let total_count = snapshot.len();
        let total_value: i64 = snapshot.iter().map(|a| a.price).sum();

        let mut per_status = [Bucket::default(); Status::ALL.len()];
        let mut replacement = Bucket::default();

        for asset in snapshot {
            let slot = Status::ALL
                .iter()
                .position(|s| *s == asset.status)
                .unwrap_or(0);
            per_status[slot].add(asset.price);

            if asset.status == Status::Normal
                && asset.years_old(today) >= config.replacement_age_years
            {
                replacement.add(asset.price);
            }
        }

        let average_price = if total_count == 0 {
            0
        } else {
            total_value / total_count as i64
        };

        let by_status = Status::ALL
            .iter()
            .zip(per_status)
            .map(|(status, bucket)| StatusBreakdown {
                status: *status,
                count: bucket.count,
                value: bucket.value,
            })
            .collect();

        Self {
            total_count,
            total_value,
            average_price,
            by_status,
            replacement,
        }
    }

    /// Bucket for a single state, for callers rendering one card.
    #[must_use]
    pub fn status_bucket(&self, status: Status) -> Bucket {
        self.by_status
            .iter()
            .find(|b| b.status == status)
            .map_or_else(Bucket::default, |b| Bucket {
                count: b.count,
                value: b.value,
            })
    }
}

/// Share of records outside normal status. Zero for an empty snapshot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn issue_ratio(snapshot: &[Asset]) -> f64 {
    if snapshot.is_empty() {
        return 0.0;
    }
    let issues = snapshot
        .iter()
        .filter(|a| a.status != Status::Normal)
        .count();
    issues as f64 / snapshot.len() as f64
}
