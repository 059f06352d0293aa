//! Schedule request parameters

use chrono::{DateTime, Utc};
use core_kernel::Currency;

use crate::error::ScheduleError;
use crate::terms::TermType;
use crate::validation;

/// The commercial terms a schedule is computed from
///
/// Fields are carried as supplied, without clamping; `validate` decides
/// whether they describe a schedule. Decoding from a wire format belongs to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Net or installment terms; `None` if absent or unrecognized
    pub terms: Option<TermType>,
    /// Total to charge, in the currency's minor unit
    pub amount_in_cents: i64,
    /// Variable fee charged on every scheduled amount, in whole percent
    pub fee_percentage: i64,
    /// Days from the start date to the final charge
    pub duration_days: i64,
    /// Anchor for every computed charge date
    pub start_date: DateTime<Utc>,
    /// Currency attached to every charge
    pub currency: Currency,
}

impl ScheduleRequest {
    /// Creates a new request
    ///
    /// # Arguments
    ///
    /// * `terms` - Net or installment terms
    /// * `amount_in_cents` - Total amount in minor units
    /// * `fee_percentage` - Variable fee in whole percent
    /// * `duration_days` - Span from start date to final charge
    /// * `start_date` - Anchor date
    /// * `currency` - Currency of the amount
    pub fn new(
        terms: TermType,
        amount_in_cents: i64,
        fee_percentage: i64,
        duration_days: i64,
        start_date: DateTime<Utc>,
        currency: Currency,
    ) -> Self {
        Self {
            terms: Some(terms),
            amount_in_cents,
            fee_percentage,
            duration_days,
            start_date,
            currency,
        }
    }

    /// Checks the request, returning the validated term type
    pub fn validate(&self) -> Result<TermType, ScheduleError> {
        validation::validate(self)
    }
}
