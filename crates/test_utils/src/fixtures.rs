//! Pre-built Test Fixtures
//!
//! Reference dates and requests whose schedules are known exactly.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::Currency;
use domain_schedule::{ScheduleRequest, TermType};

/// Fixture for reference dates
pub struct DateFixtures;

impl DateFixtures {
    /// Midnight UTC on the given day
    pub fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
    }

    /// Monday, Jan 10, 2022
    pub fn jan_10() -> DateTime<Utc> {
        Self::ymd(2022, 1, 10)
    }

    /// Wednesday, Jan 12, 2022
    pub fn jan_12() -> DateTime<Utc> {
        Self::ymd(2022, 1, 12)
    }

    /// Wednesday, Feb 9, 2022 (Jan 10 + 30 days)
    pub fn feb_9() -> DateTime<Utc> {
        Self::ymd(2022, 2, 9)
    }

    /// Saturday, Feb 26, 2022 (Jan 12 + 45 days)
    pub fn feb_26() -> DateTime<Utc> {
        Self::ymd(2022, 2, 26)
    }

    /// Monday, Feb 28, 2022
    pub fn feb_28() -> DateTime<Utc> {
        Self::ymd(2022, 2, 28)
    }

    /// Friday, Mar 11, 2022 (Jan 10 + 60 days)
    pub fn mar_11() -> DateTime<Utc> {
        Self::ymd(2022, 3, 11)
    }
}

/// Fixture for schedule requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// Net 60 on 30.00 USD with a 5% fee, starting Jan 10, 2022
    pub fn net_60() -> ScheduleRequest {
        ScheduleRequest::new(TermType::Net, 3000, 5, 60, DateFixtures::jan_10(), Currency::USD)
    }

    /// Three installments over 60 days on 30.00 USD with a 5% fee
    pub fn installments_60() -> ScheduleRequest {
        ScheduleRequest::new(TermType::Installments, 3000, 5, 60, DateFixtures::jan_10(), Currency::USD)
    }

    /// Net 45 from Jan 12, 2022, ending on a Saturday
    pub fn net_45_ending_saturday() -> ScheduleRequest {
        ScheduleRequest::new(TermType::Net, 3000, 5, 45, DateFixtures::jan_12(), Currency::USD)
    }
}
