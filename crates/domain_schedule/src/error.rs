//! Scheduling domain errors
//!
//! The six validation variants render the exact messages callers match on.

use core_kernel::{Currency, MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur while computing a payment schedule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No term type, or one that is not recognized
    #[error("must specify a term type")]
    MissingTermType,

    /// Amount is zero or negative
    #[error("amount to charge must be greater than 0")]
    NonPositiveAmount {
        amount_in_cents: i64,
    },

    /// Installment terms need at least one minor unit per installment
    #[error("minimum amount for installments is {minimum} {currency}")]
    InstallmentAmountTooSmall {
        minimum: u32,
        currency: Currency,
    },

    /// Fee percentage outside [0, 100]
    #[error("fee (in percent) must be an amount between 0 and 100")]
    FeeOutOfRange {
        fee_percentage: i64,
    },

    /// Duration is zero or negative
    #[error("duration in days must be greater than 0")]
    NonPositiveDuration {
        duration_days: i64,
    },

    /// Currency code is empty
    #[error("currency must be specified")]
    MissingCurrency,

    /// Amount arithmetic left the representable range
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Date arithmetic left the representable range
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}

impl ScheduleError {
    /// Returns true if the request itself was rejected
    pub fn is_validation(&self) -> bool {
        !matches!(self, ScheduleError::Money(_) | ScheduleError::Temporal(_))
    }
}
