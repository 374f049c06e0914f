//! Canonical SQLite schema for the asset store.
//!
//! A single `assets` table holds the latest fields for each record; there is
//! no soft delete and no history. `store_meta` tracks the schema version so
//! `stk` binaries can detect stores written by newer releases.

/// Migration v1: the assets table plus store metadata.
pub const MIGRATION_V1_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS assets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    asset_code TEXT NOT NULL UNIQUE CHECK (length(trim(asset_code)) > 0),
    name TEXT NOT NULL,
    category TEXT NOT NULL CHECK (
        category IN ('it_device', 'furniture', 'software', 'vehicle', 'other')
    ),
    status TEXT NOT NULL DEFAULT 'normal' CHECK (
        status IN (
            'normal', 'in_repair', 'returned_resigned', 'disposed',
            'sold', 'lost', 'in_storage', 'draft'
        )
    ),
    owner TEXT NOT NULL DEFAULT '',
    purchase_date TEXT NOT NULL,
    price INTEGER NOT NULL CHECK (price >= 0),
    created_at_us INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS store_meta (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    schema_version INTEGER NOT NULL,
    created_at_us INTEGER NOT NULL DEFAULT 0
);

INSERT OR IGNORE INTO store_meta (id, schema_version, created_at_us)
VALUES (1, 1, 0);
"#;

/// Migration v2: read-path indexes for list/filter/report queries.
pub const MIGRATION_V2_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_assets_status
    ON assets(status, id);

CREATE INDEX IF NOT EXISTS idx_assets_category
    ON assets(category, id);

CREATE INDEX IF NOT EXISTS idx_assets_purchase_date
    ON assets(purchase_date DESC, id);

UPDATE store_meta
SET schema_version = 2
WHERE id = 1;
"#;

/// Indexes expected by the list/filter/report read paths.
pub const REQUIRED_INDEXES: &[&str] = &[
    "idx_assets_status",
    "idx_assets_category",
    "idx_assets_purchase_date",
];
