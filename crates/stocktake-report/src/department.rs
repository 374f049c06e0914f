//! Department rollups keyed by the derived owner token.

use serde::Serialize;
use std::collections::BTreeMap;

use stocktake_core::model::Asset;

/// Book value and headcount of assets held by one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStat {
    pub department: String,
    pub total_value: i64,
    pub count: usize,
}

/// Group a snapshot by derived department.
///
/// Sorted by total value descending; equal values fall back to department
/// name so the ordering is deterministic.
#[must_use]
pub fn department_totals(snapshot: &[Asset]) -> Vec<DepartmentStat> {
    let mut totals: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
    for asset in snapshot {
        let entry = totals.entry(asset.department()).or_default();
        entry.0 += asset.price;
        entry.1 += 1;
    }

    let mut stats: Vec<DepartmentStat> = totals
        .into_iter()
        .map(|(department, (total_value, count))| DepartmentStat {
            department: department.to_string(),
            total_value,
            count,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.department.cmp(&b.department))
    });
    stats
}

/// The department holding the most value, if any records exist.
#[must_use]
pub fn top_department(snapshot: &[Asset]) -> Option<DepartmentStat> {
    department_totals(snapshot).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::{department_totals, top_department};
    use chrono::NaiveDate;
    use stocktake_core::model::{Asset, Category, Status, department::UNASSIGNED};

    fn asset(id: i64, owner: &str, price: i64) -> Asset {
        Asset {
            id,
            asset_code: format!("IT-24{id:03}"),
            name: format!("asset {id}"),
            category: Category::ItDevice,
            status: Status::Normal,
            owner: owner.into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            price,
            created_at_us: id,
        }
    }

    #[test]
    fn groups_by_derived_department_and_sorts_by_value() {
        let snapshot = vec![
            asset(1, "영업1팀 김철수", 1_000_000),
            asset(2, "개발1팀 박민수", 3_000_000),
            asset(3, "영업1팀 이영희", 1_500_000),
            asset(4, "", 200_000),
        ];

        let stats = department_totals(&snapshot);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].department, "개발1팀");
        assert_eq!(stats[0].total_value, 3_000_000);
        assert_eq!(stats[1].department, "영업1팀");
        assert_eq!(stats[1].total_value, 2_500_000);
        assert_eq!(stats[1].count, 2);
        assert_eq!(stats[2].department, UNASSIGNED);
    }

    #[test]
    fn value_ties_break_on_department_name() {
        let snapshot = vec![asset(1, "b팀 가", 100), asset(2, "a팀 나", 100)];
        let stats = department_totals(&snapshot);
        assert_eq!(stats[0].department, "a팀");
        assert_eq!(stats[1].department, "b팀");
    }

    #[test]
    fn empty_snapshot_has_no_top_department() {
        assert!(department_totals(&[]).is_empty());
        assert!(top_department(&[]).is_none());
    }

    #[test]
    fn top_department_is_the_highest_value_group() {
        let snapshot = vec![
            asset(1, "재무팀 윤준호", 60_000_000),
            asset(2, "인사팀 한수빈", 900_000),
        ];
        let top = top_department(&snapshot).unwrap();
        assert_eq!(top.department, "재무팀");
        assert_eq!(top.count, 1);
    }
}
