//! # Money Value Object
//!
//! Decimal amount paired with a currency code.
//!
//! This module provides the [`Money`] type used for all charge amounts in the
//! crate. Amounts are `rust_decimal::Decimal` values; floating point never
//! represents money anywhere in the core.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::value_objects::money::Money;
//! use rust_decimal::Decimal;
//!
//! let total = Money::new(Decimal::new(2875, 2), "USD");
//! assert_eq!(total.to_string(), "28.75 USD");
//! assert!(total.is_positive());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount with its ISO-4217 currency code.
///
/// `Money` is a plain value: it performs no arithmetic and no currency
/// conversion. Comparisons across different currencies are meaningless and
/// left to the caller to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount.
    amount: Decimal,
    /// Three-letter uppercase currency code.
    currency: String,
}

impl Money {
    /// Creates a new monetary amount.
    ///
    /// The currency code is stored uppercased so that `"usd"` and `"USD"`
    /// compare equal.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into().to_uppercase(),
        }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_uppercases_currency() {
        let money = Money::new(Decimal::ONE, "usd");
        assert_eq!(money.currency(), "USD");
    }

    #[test]
    fn zero() {
        let money = Money::zero("EUR");
        assert!(money.is_zero());
        assert!(!money.is_positive());
    }

    #[test]
    fn is_positive() {
        let money = Money::new(Decimal::from_str("0.01").unwrap(), "USD");
        assert!(money.is_positive());

        let negative = Money::new(Decimal::from_str("-1.00").unwrap(), "USD");
        assert!(!negative.is_positive());
    }

    #[test]
    fn display() {
        let money = Money::new(Decimal::from_str("28.75").unwrap(), "USD");
        assert_eq!(money.to_string(), "28.75 USD");
    }

    #[test]
    fn equality_ignores_currency_case_at_construction() {
        let a = Money::new(Decimal::TEN, "usd");
        let b = Money::new(Decimal::TEN, "USD");
        assert_eq!(a, b);
    }
}
