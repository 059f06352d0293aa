//! Request validation
//!
//! Rules run in a fixed order and the first failure is returned, so a
//! request breaking several rules always yields the same error.

use crate::error::ScheduleError;
use crate::request::ScheduleRequest;
use crate::terms::{TermType, NUM_INSTALLMENTS};

/// Validates a schedule request
///
/// # Returns
///
/// The request's term type, once every rule has passed
///
/// # Errors
///
/// The first violated rule, in this order: term type, positive amount,
/// installment minimum, fee range, positive duration, currency
pub fn validate(request: &ScheduleRequest) -> Result<TermType, ScheduleError> {
    let terms = request.terms.ok_or(ScheduleError::MissingTermType)?;

    if request.amount_in_cents <= 0 {
        return Err(ScheduleError::NonPositiveAmount {
            amount_in_cents: request.amount_in_cents,
        });
    }

    if terms.requires_installments() && request.amount_in_cents < i64::from(NUM_INSTALLMENTS) {
        return Err(ScheduleError::InstallmentAmountTooSmall {
            minimum: NUM_INSTALLMENTS,
            currency: request.currency.clone(),
        });
    }

    if !(0..=100).contains(&request.fee_percentage) {
        return Err(ScheduleError::FeeOutOfRange {
            fee_percentage: request.fee_percentage,
        });
    }

    if request.duration_days <= 0 {
        return Err(ScheduleError::NonPositiveDuration {
            duration_days: request.duration_days,
        });
    }

    if request.currency.is_empty() {
        return Err(ScheduleError::MissingCurrency);
    }

    Ok(terms)
}
