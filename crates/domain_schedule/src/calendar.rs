//! Charge date computation
//!
//! Installment charges before the last are spaced `duration / (N - 1)` days
//! apart, truncated. The final charge is anchored at `start + duration`
//! directly rather than derived from the increment, so truncation never
//! shortens the schedule. Every date is deferred off weekends once.

use chrono::{DateTime, Utc};

use core_kernel::{add_days, defer_to_weekday, TemporalError};

use crate::terms::NUM_INSTALLMENTS;

/// Days between consecutive installment charges
pub fn time_increment(duration_days: i64) -> i64 {
    duration_days / (i64::from(NUM_INSTALLMENTS) - 1)
}

/// Dates of every installment charge except the last, weekend-deferred
pub fn installment_dates(
    start_date: DateTime<Utc>,
    duration_days: i64,
) -> Result<Vec<DateTime<Utc>>, TemporalError> {
    let increment = time_increment(duration_days);

    (0..i64::from(NUM_INSTALLMENTS) - 1)
        .map(|i| add_days(start_date, i * increment).and_then(defer_to_weekday))
        .collect()
}

/// Date of the final (or only) charge, weekend-deferred
pub fn final_charge_date(
    start_date: DateTime<Utc>,
    duration_days: i64,
) -> Result<DateTime<Utc>, TemporalError> {
    defer_to_weekday(add_days(start_date, duration_days)?)
}
