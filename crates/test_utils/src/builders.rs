//! Test Data Builders
//!
//! Lets tests specify only the fields relevant to them.

use chrono::{DateTime, Utc};
use core_kernel::Currency;
use domain_schedule::{ScheduleRequest, TermType};

use crate::fixtures::DateFixtures;

/// Builder for schedule requests
///
/// Defaults to installment terms on 3000 USD cents, 5% fee, 60 days,
/// starting Monday Jan 10, 2022.
#[derive(Debug, Clone)]
pub struct ScheduleRequestBuilder {
    terms: Option<TermType>,
    amount_in_cents: i64,
    fee_percentage: i64,
    duration_days: i64,
    start_date: DateTime<Utc>,
    currency: Currency,
}

impl Default for ScheduleRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            terms: Some(TermType::Installments),
            amount_in_cents: 3000,
            fee_percentage: 5,
            duration_days: 60,
            start_date: DateFixtures::jan_10(),
            currency: Currency::USD,
        }
    }

    pub fn terms(mut self, terms: TermType) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Leaves the term type unset
    pub fn without_terms(mut self) -> Self {
        self.terms = None;
        self
    }

    pub fn amount(mut self, amount_in_cents: i64) -> Self {
        self.amount_in_cents = amount_in_cents;
        self
    }

    pub fn fee(mut self, fee_percentage: i64) -> Self {
        self.fee_percentage = fee_percentage;
        self
    }

    pub fn duration(mut self, duration_days: i64) -> Self {
        self.duration_days = duration_days;
        self
    }

    pub fn start(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn currency(mut self, currency: impl Into<Currency>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builds the request
    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest {
            terms: self.terms,
            amount_in_cents: self.amount_in_cents,
            fee_percentage: self.fee_percentage,
            duration_days: self.duration_days,
            start_date: self.start_date,
            currency: self.currency,
        }
    }
}
