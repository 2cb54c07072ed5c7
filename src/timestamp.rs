//! Parser for the exporter's fixed timestamp format.
//!
//! Timestamps look like `14/08/2022, 8:18 am`: day and month are always two
//! digits, the year four, and the hour one or two. Fields are taken by fixed
//! character offset, so the format is rigid by construction.

use chrono::{DateTime, TimeZone, Utc};
use std::str::FromStr;

use crate::error::{ChatStatsError, Result};

/// Parse a `DD/MM/YYYY, H:MM am|pm` timestamp into a UTC point in time.
///
/// The clock is converted from 12-hour to 24-hour form: `pm` adds 12 unless
/// the hour is already 12. A literal `12 am` is left as hour 12 rather than
/// midnight, a known deviation from calendar convention kept for parity with
/// the exporter's original tooling.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    let day: u32 = numeric_field(timestamp, 0, 2, "day")?;
    let month: u32 = numeric_field(timestamp, 3, 5, "month")?;
    let year: i32 = numeric_field(timestamp, 6, 10, "year")?;

    let time_of_day = timestamp
        .split(' ')
        .nth(1)
        .ok_or_else(|| invalid(timestamp, "missing time of day"))?;

    let mut clock = time_of_day.split(':');
    let mut hour: u32 = clock
        .next()
        .and_then(|h| h.parse().ok())
        .ok_or_else(|| invalid(timestamp, "unparseable hour"))?;
    let minute: u32 = clock
        .next()
        .and_then(|m| m.parse().ok())
        .ok_or_else(|| invalid(timestamp, "unparseable minute"))?;

    // Convert to 24 hour clock format. "12 am" intentionally stays 12.
    if timestamp.contains("pm") && hour != 12 {
        hour += 12;
    }

    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| invalid(timestamp, "fields do not form a valid date"))
}

/// Extract a numeric field from a fixed character range.
fn numeric_field<T: FromStr>(input: &str, start: usize, end: usize, name: &str) -> Result<T> {
    input
        .get(start..end)
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| invalid(input, &format!("unparseable {name} field")))
}

fn invalid(input: &str, reason: &str) -> ChatStatsError {
    ChatStatsError::Timestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
