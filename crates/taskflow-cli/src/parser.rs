use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_english::{parse_date_string, Dialect};

/// Parses a calendar-day date; dates carry no time-of-day in this tracker.
pub fn parse_calendar_date(date_str: &str) -> Result<NaiveDate> {
    parse_date_string(date_str, Utc::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}
