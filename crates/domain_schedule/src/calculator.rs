//! Payment schedule calculator
//!
//! Assembles validation, splitting, fee application and charge dates into
//! the final ordered schedule.

use tracing::{debug, instrument};

use core_kernel::{FeeRate, Money};

use crate::allocation::InstallmentSplit;
use crate::calendar;
use crate::error::ScheduleError;
use crate::payment::{PaymentSchedule, ScheduledPayment};
use crate::request::ScheduleRequest;
use crate::validation;

/// Computes payment schedules
///
/// Holds no state; a single value can be shared across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleCalculator;

impl ScheduleCalculator {
    pub const fn new() -> Self {
        Self
    }

    /// Computes the payment schedule for a request
    ///
    /// # Returns
    ///
    /// One payment for net terms, `NUM_INSTALLMENTS` for installment terms,
    /// in chronological order. The final payment carries the fee-adjusted
    /// remainder on top of the fee-adjusted installment.
    ///
    /// # Errors
    ///
    /// The first validation rule the request breaks; no partial schedule is
    /// ever returned. Arithmetic beyond the representable range of amounts
    /// or dates is reported as `Money` or `Temporal`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            terms = ?request.terms,
            amount_in_cents = request.amount_in_cents,
            currency = %request.currency,
        )
    )]
    pub fn compute_schedule(&self, request: &ScheduleRequest) -> Result<PaymentSchedule, ScheduleError> {
        let terms = match validation::validate(request) {
            Ok(terms) => terms,
            Err(e) => {
                debug!(error = %e, "Rejected schedule request");
                return Err(e);
            }
        };

        let total = Money::from_minor(request.amount_in_cents, request.currency.clone());
        let split = InstallmentSplit::for_terms(terms, &total)
            .surcharged(FeeRate::from_percentage(request.fee_percentage))?;

        let mut payments = Vec::with_capacity(terms.charge_count());

        if terms.requires_installments() {
            for date in calendar::installment_dates(request.start_date, request.duration_days)? {
                payments.push(ScheduledPayment::new(date, split.installment.clone()));
            }
        }

        let final_date = calendar::final_charge_date(request.start_date, request.duration_days)?;
        payments.push(ScheduledPayment::new(final_date, split.final_amount()?));

        debug!(payments = payments.len(), "Computed payment schedule");
        Ok(PaymentSchedule::from(payments))
    }
}

/// Computes the payment schedule for a request
pub fn compute_schedule(request: &ScheduleRequest) -> Result<PaymentSchedule, ScheduleError> {
    ScheduleCalculator.compute_schedule(request)
}
