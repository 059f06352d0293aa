//! Custom Test Assertions
//!
//! Assertion helpers for schedule invariants with descriptive failure messages.

use chrono::Datelike;
use core_kernel::{is_weekend, Currency};
use domain_schedule::PaymentSchedule;

/// Asserts that charge dates never go backwards
pub fn assert_chronological(schedule: &PaymentSchedule) {
    for pair in schedule.as_slice().windows(2) {
        assert!(
            pair[0].date <= pair[1].date,
            "Schedule out of order: {} precedes {}",
            pair[0].date,
            pair[1].date
        );
    }
}

/// Asserts that no charge falls on a weekend
pub fn assert_no_weekend_charges(schedule: &PaymentSchedule) {
    for payment in schedule {
        assert!(
            !is_weekend(payment.date),
            "Charge scheduled on a weekend: {} ({:?})",
            payment.date,
            payment.date.weekday()
        );
    }
}

/// Asserts that every charge carries the given currency
pub fn assert_all_in_currency(schedule: &PaymentSchedule, currency: &Currency) {
    for payment in schedule {
        assert_eq!(
            &payment.currency, currency,
            "Currency mismatch on charge dated {}",
            payment.date
        );
    }
}

/// Asserts the amounts of a schedule, in order
pub fn assert_amounts(schedule: &PaymentSchedule, expected: &[i64]) {
    let actual: Vec<i64> = schedule.iter().map(|p| p.amount_in_cents).collect();
    assert_eq!(actual, expected, "Scheduled amounts differ");
}
