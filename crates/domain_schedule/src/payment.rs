//! Scheduled payments
//!
//! The output of a schedule computation: dated charges in chronological
//! order. They describe intent only; executing a charge is up to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// A single charge in a payment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    /// When the charge is made
    pub date: DateTime<Utc>,
    /// Amount to charge, in minor units, fee included
    #[serde(rename = "amountInCents")]
    pub amount_in_cents: i64,
    /// Currency of the charge
    pub currency: Currency,
}

impl ScheduledPayment {
    /// Creates a payment for the given amount on the given date
    pub fn new(date: DateTime<Utc>, amount: Money) -> Self {
        Self {
            date,
            amount_in_cents: amount.minor_units(),
            currency: amount.currency().clone(),
        }
    }

    /// Returns the amount as Money
    pub fn amount(&self) -> Money {
        Money::from_minor(self.amount_in_cents, self.currency.clone())
    }
}

/// An ordered sequence of scheduled payments
///
/// Payment `i + 1` is the next charge after payment `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentSchedule {
    payments: Vec<ScheduledPayment>,
}

impl PaymentSchedule {
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledPayment> {
        self.payments.iter()
    }

    pub fn as_slice(&self) -> &[ScheduledPayment] {
        &self.payments
    }

    /// Returns the last charge, which carries any remainder
    pub fn final_payment(&self) -> Option<&ScheduledPayment> {
        self.payments.last()
    }

    /// Sum of all charges in minor units, `None` on overflow
    pub fn total_in_cents(&self) -> Option<i64> {
        self.payments
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.amount_in_cents))
    }

    pub fn into_inner(self) -> Vec<ScheduledPayment> {
        self.payments
    }
}

impl From<Vec<ScheduledPayment>> for PaymentSchedule {
    fn from(payments: Vec<ScheduledPayment>) -> Self {
        Self { payments }
    }
}

impl IntoIterator for PaymentSchedule {
    type Item = ScheduledPayment;
    type IntoIter = std::vec::IntoIter<ScheduledPayment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.into_iter()
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = &'a ScheduledPayment;
    type IntoIter = std::slice::Iter<'a, ScheduledPayment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.iter()
    }
}
