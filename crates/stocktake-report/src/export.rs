//! Delimited-text export of a filtered snapshot.
//!
//! One record per line with a header row and RFC-4180-style quoting. The
//! output starts with a UTF-8 BOM: spreadsheet tools still guess legacy
//! encodings for bare UTF-8 files, and the BOM is what keeps Hangul owner
//! and asset names intact when the file lands in Excel.

use chrono::DateTime;
use std::io::{self, Write};

use stocktake_core::model::Asset;

/// Byte-order mark emitted ahead of the header.
pub const UTF8_BOM: &str = "\u{feff}";

const HEADER: &str = "id,asset_code,name,category,status,owner,purchase_date,price,created_at";

/// Serialize the snapshot as CSV into `w`.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_csv<W: Write>(w: &mut W, snapshot: &[Asset]) -> io::Result<()> {
    write!(w, "{UTF8_BOM}")?;
    writeln!(w, "{HEADER}")?;
    for asset in snapshot {
        writeln!(w, "{}", record_line(asset))?;
    }
    Ok(())
}

/// Serialize the snapshot to an owned CSV string.
///
/// # Panics
///
/// Never: writing into a `Vec<u8>` cannot fail and the output is UTF-8 by
/// construction.
#[must_use]
pub fn to_csv_string(snapshot: &[Asset]) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, snapshot).expect("in-memory write");
    String::from_utf8(buf).expect("csv output is utf-8")
}

fn record_line(asset: &Asset) -> String {
    let created_at = DateTime::from_timestamp_micros(asset.created_at_us)
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_default();

    [
        asset.id.to_string(),
        escape(&asset.asset_code),
        escape(&asset.name),
        asset.category.as_str().to_string(),
        asset.status.as_str().to_string(),
        escape(&asset.owner),
        asset.purchase_date.format("%Y-%m-%d").to_string(),
        asset.price.to_string(),
        created_at,
    ]
    .join(",")
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
