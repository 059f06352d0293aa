//! Amount splitting and fee application
//!
//! The total is divided by the installment count with integer division.
//! The fee is then applied to the per-installment amount and to the
//! remainder separately, each rounded up on its own, and only the final
//! charge receives the remainder. Rounding the parts before summing can
//! differ by a minor unit from rounding the sum, and the schedule depends
//! on the former.

use core_kernel::{FeeRate, Money, MoneyError};

use crate::terms::{TermType, NUM_INSTALLMENTS};

/// A total divided into an amount charged per installment and a remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentSplit {
    /// Charged on every scheduled payment
    pub installment: Money,
    /// Added to the final payment only
    pub remainder: Money,
}

impl InstallmentSplit {
    /// Splits according to the term type
    ///
    /// Net terms keep the whole total as the single charge with nothing left over.
    pub fn for_terms(terms: TermType, total: &Money) -> Self {
        match terms {
            TermType::Installments => split_installments(total),
            TermType::Net => Self::whole(total),
        }
    }

    /// Keeps the total as one undivided charge
    pub fn whole(total: &Money) -> Self {
        Self {
            installment: total.clone(),
            remainder: Money::zero(total.currency().clone()),
        }
    }

    /// Applies the fee to installment and remainder independently
    pub fn surcharged(&self, rate: FeeRate) -> Result<Self, MoneyError> {
        Ok(Self {
            installment: self.installment.surcharge(rate)?,
            remainder: self.remainder.surcharge(rate)?,
        })
    }

    /// Returns the amount of the final charge, installment plus remainder
    pub fn final_amount(&self) -> Result<Money, MoneyError> {
        self.installment.checked_add(&self.remainder)
    }
}

/// Divides a total into `NUM_INSTALLMENTS` equal parts plus a remainder
///
/// Uses truncating division; for a positive total the remainder lies in
/// `0..NUM_INSTALLMENTS`.
pub fn split_installments(total: &Money) -> InstallmentSplit {
    let count = i64::from(NUM_INSTALLMENTS);
    let currency = total.currency().clone();

    InstallmentSplit {
        installment: Money::from_minor(total.minor_units() / count, currency.clone()),
        remainder: Money::from_minor(total.minor_units() % count, currency),
    }
}
