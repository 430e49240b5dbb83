//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the console

use chrono::{DateTime, NaiveDateTime};

const DATETIME_DISPLAY: &str = "%d.%m.%Y %H:%M";
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Format a stored datetime as DD.MM.YYYY HH:MM
/// Example: "2025-01-10T09:00:00" -> "10.01.2025 09:00"
///
/// Empty input renders as "-"; anything unparseable is shown as received.
pub fn format_datetime(datetime_str: &str) -> String {
    let value = datetime_str.trim();
    if value.is_empty() {
        return "-".to_string();
    }
    parse(value)
        .map(|dt| dt.format(DATETIME_DISPLAY).to_string())
        .unwrap_or_else(|| value.to_string())
}
