//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating schedule requests that
//! satisfy, or deliberately break, the validation rules.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::Currency;
use domain_schedule::{ScheduleRequest, TermType};
use proptest::prelude::*;

/// Strategy for generating term types
pub fn term_type_strategy() -> impl Strategy<Value = TermType> {
    prop_oneof![Just(TermType::Net), Just(TermType::Installments)]
}

/// Strategy for generating non-empty currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        "[A-Z]{3}".prop_map(|code: String| Currency::new(code)),
    ]
}

/// Strategy for generating amounts valid for any term type
pub fn valid_amount_strategy() -> impl Strategy<Value = i64> {
    3i64..1_000_000_000i64
}

/// Strategy for generating fee percentages in [0, 100]
pub fn valid_fee_strategy() -> impl Strategy<Value = i64> {
    0i64..=100i64
}

/// Strategy for generating durations up to ten years
pub fn valid_duration_strategy() -> impl Strategy<Value = i64> {
    1i64..3650i64
}

/// Strategy for generating start dates between 2000 and ~2050, any time of day
pub fn start_date_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..18_250i64, 0i64..86_400i64).prop_map(|(days, secs)| {
        let base = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        base + Duration::days(days) + Duration::seconds(secs)
    })
}

/// Strategy for generating requests that pass validation
pub fn valid_request_strategy() -> impl Strategy<Value = ScheduleRequest> {
    (
        term_type_strategy(),
        valid_amount_strategy(),
        valid_fee_strategy(),
        valid_duration_strategy(),
        start_date_strategy(),
        currency_strategy(),
    )
        .prop_map(|(terms, amount, fee, duration, start, currency)| {
            ScheduleRequest::new(terms, amount, fee, duration, start, currency)
        })
}
