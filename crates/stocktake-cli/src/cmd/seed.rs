//! `stk seed` — populate the store with a randomized sample fleet.
//!
//! Useful for demos and for exercising the dashboard against realistic data:
//! Korean department/person owners, category-prefixed asset codes, a status
//! mix skewed toward `normal`, and purchase dates spread over three years.

use chrono::{Duration, Utc};
use clap::Args;
use rand::Rng;
use std::path::Path;

use stocktake_core::db::store;
use stocktake_core::error::RegistryError;
use stocktake_core::model::{Category, NewAsset, Status};

use crate::cmd::open_for_write;
use crate::output::{OutputMode, render_success};

/// Arguments for `stk seed`.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Number of sample assets to add.
    #[arg(long, default_value_t = 40)]
    pub count: u32,
}

const DEPARTMENTS: &[&str] = &[
    "영업1팀", "영업2팀", "기획팀", "개발1팀", "개발2팀", "인사팀", "재무팀", "디자인팀",
];

const LAST_NAMES: &[&str] = &[
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신",
];

const FIRST_NAMES: &[&str] = &[
    "철수", "영희", "민수", "지영", "동현", "현우", "서준", "지민", "민지", "예진", "준호",
    "성민", "수빈",
];

const CATALOG: &[(Category, &str, i64)] = &[
    (Category::ItDevice, "MacBook Pro 16 M3", 3_500_000),
    (Category::ItDevice, "MacBook Air 15 M2", 2_000_000),
    (Category::ItDevice, "Dell XPS 15", 2_800_000),
    (Category::ItDevice, "LG Gram 17", 1_900_000),
    (Category::ItDevice, "iPad Pro 12.9", 1_700_000),
    (Category::ItDevice, "Dell UltraSharp Monitor 27", 600_000),
    (Category::Furniture, "퍼시스 모션데스크", 800_000),
    (Category::Furniture, "시디즈 T50 의자", 350_000),
    (Category::Furniture, "허먼밀러 에어론", 1_800_000),
    (Category::Furniture, "회의용 테이블", 600_000),
    (Category::Software, "Adobe CC All Apps", 700_000),
    (Category::Software, "JetBrains All Products", 400_000),
    (Category::Software, "Microsoft 365 Business", 200_000),
    (Category::Vehicle, "제네시스 G80 (법인)", 60_000_000),
    (Category::Vehicle, "아반떼 CN7 (영업용)", 25_000_000),
    (Category::Other, "네스프레소 커피머신", 250_000),
    (Category::Other, "LG 퓨리케어 공기청정기", 800_000),
    (Category::Other, "다이슨 청소기", 900_000),
];

// Skewed toward normal, mirroring a real fleet.
const STATUS_MIX: &[Status] = &[
    Status::Normal,
    Status::Normal,
    Status::Normal,
    Status::Normal,
    Status::Normal,
    Status::Normal,
    Status::InRepair,
    Status::ReturnedResigned,
    Status::Disposed,
    Status::Sold,
    Status::Lost,
];

const fn code_prefix(category: Category) -> &'static str {
    match category {
        Category::ItDevice => "IT",
        Category::Furniture => "FUR",
        Category::Software => "SW",
        Category::Vehicle => "CAR",
        Category::Other => "ETC",
    }
}

/// Execute `stk seed`.
pub fn run_seed(args: &SeedArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let conn = open_for_write(project_root)?;
    let mut rng = rand::thread_rng();

    // Continue code sequences past whatever is already registered.
    let mut seq = store::count(&conn)? + 1;
    let today = Utc::now().date_naive();
    let mut added = 0_u32;

    while added < args.count {
        let (category, item_name, base_price) = CATALOG[rng.gen_range(0..CATALOG.len())];
        let status = STATUS_MIX[rng.gen_range(0..STATUS_MIX.len())];

        // Holders only make sense for assets still in someone's hands.
        let owner = if status.clears_owner() {
            String::new()
        } else {
            format!(
                "{} {}{}",
                DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())],
                LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())],
                FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            )
        };

        // Price wobbles ±10% in thousand-won steps; dates cover three years.
        let price = (base_price as f64 * rng.gen_range(0.9..1.1)) as i64 / 1000 * 1000;
        let purchase_date = today - Duration::days(rng.gen_range(0..365 * 3));
        let year_suffix = purchase_date.format("%y");

        let fields = NewAsset {
            asset_code: format!("{}-{}{:03}", code_prefix(category), year_suffix, seq),
            name: item_name.to_string(),
            category,
            owner,
            purchase_date,
            price,
            status,
        };

        match store::insert(&conn, &fields) {
            Ok(_) => added += 1,
            // A previous seeding run may already hold this code.
            Err(RegistryError::DuplicateCode { .. }) => {}
            Err(e) => return Err(e.into()),
        }
        seq += 1;
    }

    render_success(output, &format!("seeded {added} sample assets"))
}
