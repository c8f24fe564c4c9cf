//! Timestamp generation for line prefixes
//!
//! Timestamps are always UTC with a fixed three-digit millisecond fraction:
//! `2025-01-08 10:30:45.123 UTC`.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// strftime pattern used for every line prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// Format a UTC instant as a line-prefix timestamp.
#[must_use]
pub fn format(datetime: &DateTime<Utc>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a `SystemTime` as a line-prefix timestamp.
#[must_use]
pub fn format_system_time(timestamp: &SystemTime) -> String {
    let datetime: DateTime<Utc> = (*timestamp).into();
    format(&datetime)
}

/// The current time as a line-prefix timestamp.
#[must_use]
pub fn now() -> String {
    format(&Utc::now())
}
