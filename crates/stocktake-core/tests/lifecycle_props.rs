//! Property tests for the status side-effect contract: whatever the prior
//! owner, entering a release state clears it and a holding state keeps it.

use chrono::NaiveDate;
use proptest::prelude::*;
use stocktake_core::lifecycle;
use stocktake_core::model::{Asset, Category, Status};

fn arb_status() -> impl Strategy<Value = Status> {
    proptest::sample::select(Status::ALL.to_vec())
}

fn arb_asset() -> impl Strategy<Value = Asset> {
    (".{0,40}", arb_status(), 0_i64..100_000_000).prop_map(|(owner, status, price)| Asset {
        id: 1,
        asset_code: "IT-24001".into(),
        name: "prop asset".into(),
        category: Category::ItDevice,
        status,
        owner,
        purchase_date: NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date"),
        price,
        created_at_us: 0,
    })
}

proptest! {
    #[test]
    fn release_states_always_clear_owner(asset in arb_asset(), next in arb_status()) {
        let mut updated = asset.clone();
        lifecycle::apply(&mut updated, next);

        prop_assert_eq!(updated.status, next);
        if next.clears_owner() {
            prop_assert_eq!(updated.owner, "");
        } else {
            prop_assert_eq!(updated.owner, asset.owner);
        }
    }

    #[test]
    fn apply_is_idempotent(asset in arb_asset(), next in arb_status()) {
        let mut once = asset.clone();
        lifecycle::apply(&mut once, next);
        let mut twice = once.clone();
        lifecycle::apply(&mut twice, next);

        prop_assert_eq!(once, twice);
    }
}
