//!
//! Utility functions.
//!

pub mod btreemap;

use chrono::DateTime;

///
/// Renders a Unix-epoch milliseconds date as a human-readable UTC datetime.
///
/// Dates outside the representable range fall back to the raw number.
///
pub fn format_timestamp_ms(milliseconds: u64) -> String {
    DateTime::from_timestamp_millis(milliseconds as i64)
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| milliseconds.to_string())
}
