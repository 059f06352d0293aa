//! Calendar arithmetic for charge dates
//!
//! Charge dates are computed by whole-day offsets from an anchor and then
//! moved off weekends. No holiday calendar is modeled.

use chrono::{DateTime, Datelike, TimeDelta, Utc, Weekday};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date out of range: {date} plus {days} days")]
    OutOfRange {
        date: String,
        days: i64,
    },
}

/// Adds a whole number of days to a timestamp, preserving the time of day
pub fn add_days(date: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, TemporalError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| TemporalError::OutOfRange {
            date: date.to_rfc3339(),
            days,
        })
}

/// Returns true if the date falls on Saturday or Sunday
pub fn is_weekend(date: DateTime<Utc>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves a weekend date forward to the following Monday
///
/// Saturday moves two days, Sunday one; weekdays are returned unchanged.
/// A single step always lands on a weekday, so the rule is never reapplied.
pub fn defer_to_weekday(date: DateTime<Utc>) -> Result<DateTime<Utc>, TemporalError> {
    match date.weekday() {
        Weekday::Sat => add_days(date, 2),
        Weekday::Sun => add_days(date, 1),
        _ => Ok(date),
    }
}
