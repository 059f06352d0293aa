//! Money types with exact integer and decimal arithmetic
//!
//! Amounts are carried as integers in the currency's smallest unit (cents
//! for USD). Percentage surcharges go through rust_decimal so that no
//! binary floating-point error can leak into a charged amount.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Currency identifier attached to every scheduled amount
///
/// Any code is accepted; the only structural check the scheduling domain
/// performs is that it is non-empty. No conversion between currencies
/// ever takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    pub const USD: Currency = Currency(Cow::Borrowed("USD"));
    pub const EUR: Currency = Currency(Cow::Borrowed("EUR"));
    pub const GBP: Currency = Currency(Cow::Borrowed("GBP"));
    pub const JPY: Currency = Currency(Cow::Borrowed("JPY"));

    /// Creates a currency from an arbitrary code
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Returns the currency code as given
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Returns true if no code was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of decimal places of the minor unit
    pub fn decimal_places(&self) -> u32 {
        match self.code() {
            "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::new(code)
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in minor units with its currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self { minor_units, currency }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Returns the amount in minor units
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the amount in major units (e.g., dollars)
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.decimal_places())
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Checked addition that fails on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        let minor_units = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::from_minor(minor_units, self.currency.clone()))
    }

    /// Inflates the amount by the given fee rate, rounding up to the next minor unit
    pub fn surcharge(&self, rate: FeeRate) -> Result<Money, MoneyError> {
        let minor_units = rate.apply_ceil(self.minor_units)?;
        Ok(Self::from_minor(minor_units, self.currency.clone()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_major(), self.currency)
    }
}

/// A variable fee expressed as a whole percentage of the charged amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl FeeRate {
    /// A rate that leaves amounts unchanged
    pub const ZERO: FeeRate = FeeRate { value: Decimal::ZERO };

    /// Creates a rate from a percentage (e.g., 5 for 5%)
    pub fn from_percentage(percentage: i64) -> Self {
        Self {
            value: Decimal::from(percentage) / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns the factor an amount is multiplied by, `1 + rate`
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE + self.value
    }

    /// Computes `ceil(minor_units * (1 + rate))`
    ///
    /// Rounding is always upward so fractional minor units never go
    /// uncollected.
    pub fn apply_ceil(&self, minor_units: i64) -> Result<i64, MoneyError> {
        Decimal::from(minor_units)
            .checked_mul(self.multiplier())
            .ok_or(MoneyError::Overflow)?
            .ceil()
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_constants_equal_owned_codes() {
        assert_eq!(Currency::USD, Currency::new("USD"));
        assert_ne!(Currency::USD, Currency::EUR);
    }

    #[test]
    fn test_empty_currency() {
        assert!(Currency::new("").is_empty());
        assert!(!Currency::USD.is_empty());
    }

    #[test]
    fn test_money_display_uses_major_units() {
        assert_eq!(Money::from_minor(1050, Currency::USD).to_string(), "10.50 USD");
        assert_eq!(Money::from_minor(1050, Currency::JPY).to_string(), "1050 JPY");
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::from_minor(100, Currency::USD);
        let eur = Money::from_minor(100, Currency::EUR);

        let result = usd.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_fee_rate_rounds_up() {
        let rate = FeeRate::from_percentage(5);
        assert_eq!(rate.apply_ceil(1000).unwrap(), 1050);
        assert_eq!(rate.apply_ceil(1).unwrap(), 2);
        assert_eq!(rate.apply_ceil(0).unwrap(), 0);
    }

    #[test]
    fn test_fee_rate_display() {
        assert_eq!(FeeRate::from_percentage(5).to_string(), "5%");
    }
}
