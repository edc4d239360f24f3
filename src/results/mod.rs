//! Result types for search results
//!
//! This module defines the record every other layer passes around.

mod types;

pub use types::SearchResult;

use chrono::{DateTime, FixedOffset};

/// Parse an ISO-8601 timestamp carrying a UTC offset
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`) and the minute-precision form
/// `2024-01-01T00:00+02:00`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z"))
        .ok()
}
