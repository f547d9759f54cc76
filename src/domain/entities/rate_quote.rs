//! # Rate Quote
//!
//! One priced shipping-service offer.
//!
//! This module provides the [`RateQuote`] entity produced by carrier
//! providers, along with [`Surcharge`] for itemized extra charges. Quotes are
//! assembled by carrier mappers through [`RateQuoteBuilder`] and are
//! immutable once built.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::entities::rate_quote::RateQuote;
//! use rate_shop::domain::value_objects::{CarrierId, Money, ServiceLevel};
//! use rust_decimal::Decimal;
//!
//! let quote = RateQuote::builder(
//!     CarrierId::new("ups"),
//!     "03",
//!     "UPS Ground",
//!     Money::new(Decimal::new(1550, 2), "USD"),
//! )
//! .service_level(ServiceLevel::Ground)
//! .transit_days(3)
//! .build();
//!
//! assert_eq!(quote.service_name(), "UPS Ground");
//! assert!(!quote.is_guaranteed());
//! ```

use crate::domain::entities::package::Weight;
use crate::domain::value_objects::{CarrierId, Money, ServiceLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An itemized extra charge on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surcharge {
    /// Carrier-reported charge code.
    code: String,
    /// Human-readable description, when the carrier provides one.
    description: Option<String>,
    /// Charge amount.
    amount: Money,
}

impl Surcharge {
    /// Creates a new surcharge.
    #[must_use]
    pub fn new(code: impl Into<String>, description: Option<String>, amount: Money) -> Self {
        Self {
            code: code.into(),
            description,
            amount,
        }
    }

    /// Returns the charge code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the description, if any.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the charge amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> &Money {
        &self.amount
    }
}

impl fmt::Display for Surcharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surcharge({}: {})", self.code, self.amount)
    }
}

/// One priced shipping-service offer from a carrier.
///
/// Quotes keep the carrier's native service code alongside the normalized
/// [`ServiceLevel`] so callers can both display and compare offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Carrier that produced this quote.
    carrier: CarrierId,
    /// Carrier-native service code.
    service_code: String,
    /// Human-readable service name.
    service_name: String,
    /// Normalized service level, when the code is known.
    service_level: Option<ServiceLevel>,
    /// Total charges including surcharges.
    total_charges: Money,
    /// Base transportation charges.
    base_charges: Money,
    /// Itemized surcharges in carrier-reported order.
    surcharges: Vec<Surcharge>,
    /// Business days in transit, when reported.
    transit_days: Option<u32>,
    /// Estimated delivery date string, when reported.
    estimated_delivery: Option<String>,
    /// True if the carrier guarantees the delivery commitment.
    guaranteed_delivery: bool,
    /// Billing weight used for pricing, when reported.
    billing_weight: Option<Weight>,
}

impl RateQuote {
    /// Starts building a quote.
    #[must_use]
    pub fn builder(
        carrier: CarrierId,
        service_code: impl Into<String>,
        service_name: impl Into<String>,
        total_charges: Money,
    ) -> RateQuoteBuilder {
        RateQuoteBuilder::new(carrier, service_code, service_name, total_charges)
    }

    /// Returns the carrier that produced this quote.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &CarrierId {
        &self.carrier
    }

    /// Returns the carrier-native service code.
    #[inline]
    #[must_use]
    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    /// Returns the human-readable service name.
    #[inline]
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the normalized service level, when the code is known.
    #[inline]
    #[must_use]
    pub fn service_level(&self) -> Option<ServiceLevel> {
        self.service_level
    }

    /// Returns the total charges.
    #[inline]
    #[must_use]
    pub fn total_charges(&self) -> &Money {
        &self.total_charges
    }

    /// Returns the base transportation charges.
    #[inline]
    #[must_use]
    pub fn base_charges(&self) -> &Money {
        &self.base_charges
    }

    /// Returns the itemized surcharges in carrier-reported order.
    #[inline]
    #[must_use]
    pub fn surcharges(&self) -> &[Surcharge] {
        &self.surcharges
    }

    /// Returns the business days in transit, when reported.
    #[inline]
    #[must_use]
    pub fn transit_days(&self) -> Option<u32> {
        self.transit_days
    }

    /// Returns the estimated delivery date string, when reported.
    #[inline]
    #[must_use]
    pub fn estimated_delivery(&self) -> Option<&str> {
        self.estimated_delivery.as_deref()
    }

    /// Returns true if the carrier guarantees the delivery commitment.
    #[inline]
    #[must_use]
    pub fn is_guaranteed(&self) -> bool {
        self.guaranteed_delivery
    }

    /// Returns the billing weight used for pricing, when reported.
    #[inline]
    #[must_use]
    pub fn billing_weight(&self) -> Option<&Weight> {
        self.billing_weight.as_ref()
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RateQuote({} {} @ {})",
            self.carrier, self.service_code, self.total_charges
        )
    }
}

/// Builder for [`RateQuote`].
#[derive(Debug, Clone)]
pub struct RateQuoteBuilder {
    carrier: CarrierId,
    service_code: String,
    service_name: String,
    service_level: Option<ServiceLevel>,
    total_charges: Money,
    base_charges: Option<Money>,
    surcharges: Vec<Surcharge>,
    transit_days: Option<u32>,
    estimated_delivery: Option<String>,
    guaranteed_delivery: bool,
    billing_weight: Option<Weight>,
}

impl RateQuoteBuilder {
    /// Creates a builder for a quote with the required fields.
    #[must_use]
    pub fn new(
        carrier: CarrierId,
        service_code: impl Into<String>,
        service_name: impl Into<String>,
        total_charges: Money,
    ) -> Self {
        Self {
            carrier,
            service_code: service_code.into(),
            service_name: service_name.into(),
            service_level: None,
            total_charges,
            base_charges: None,
            surcharges: Vec::new(),
            transit_days: None,
            estimated_delivery: None,
            guaranteed_delivery: false,
            billing_weight: None,
        }
    }

    /// Sets the normalized service level.
    #[must_use]
    pub fn service_level(mut self, service_level: ServiceLevel) -> Self {
        self.service_level = Some(service_level);
        self
    }

    /// Sets the base transportation charges. Defaults to the total charges
    /// when not set.
    #[must_use]
    pub fn base_charges(mut self, base_charges: Money) -> Self {
        self.base_charges = Some(base_charges);
        self
    }

    /// Replaces the surcharge list.
    #[must_use]
    pub fn surcharges(mut self, surcharges: Vec<Surcharge>) -> Self {
        self.surcharges = surcharges;
        self
    }

    /// Sets the business days in transit.
    #[must_use]
    pub fn transit_days(mut self, transit_days: u32) -> Self {
        self.transit_days = Some(transit_days);
        self
    }

    /// Sets the estimated delivery date string.
    #[must_use]
    pub fn estimated_delivery(mut self, estimated_delivery: impl Into<String>) -> Self {
        self.estimated_delivery = Some(estimated_delivery.into());
        self
    }

    /// Marks the delivery commitment as guaranteed.
    #[must_use]
    pub fn guaranteed(mut self, guaranteed: bool) -> Self {
        self.guaranteed_delivery = guaranteed;
        self
    }

    /// Sets the billing weight.
    #[must_use]
    pub fn billing_weight(mut self, billing_weight: Weight) -> Self {
        self.billing_weight = Some(billing_weight);
        self
    }

    /// Builds the quote.
    #[must_use]
    pub fn build(self) -> RateQuote {
        let base_charges = self
            .base_charges
            .unwrap_or_else(|| self.total_charges.clone());

        RateQuote {
            carrier: self.carrier,
            service_code: self.service_code,
            service_name: self.service_name,
            service_level: self.service_level,
            total_charges: self.total_charges,
            base_charges,
            surcharges: self.surcharges,
            transit_days: self.transit_days,
            estimated_delivery: self.estimated_delivery,
            guaranteed_delivery: self.guaranteed_delivery,
            billing_weight: self.billing_weight,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn money(value: &str) -> Money {
        Money::new(Decimal::from_str(value).unwrap(), "USD")
    }

    fn test_quote() -> RateQuote {
        RateQuote::builder(CarrierId::new("ups"), "03", "UPS Ground", money("15.50")).build()
    }

    #[test]
    fn builder_defaults() {
        let quote = test_quote();
        assert!(quote.service_level().is_none());
        assert!(quote.surcharges().is_empty());
        assert!(quote.transit_days().is_none());
        assert!(!quote.is_guaranteed());
    }

    #[test]
    fn base_charges_default_to_total() {
        let quote = test_quote();
        assert_eq!(quote.base_charges(), quote.total_charges());
    }

    #[test]
    fn base_charges_when_set() {
        let quote = RateQuote::builder(CarrierId::new("ups"), "03", "UPS Ground", money("15.50"))
            .base_charges(money("12.00"))
            .build();
        assert_eq!(quote.base_charges(), &money("12.00"));
        assert_eq!(quote.total_charges(), &money("15.50"));
    }

    #[test]
    fn surcharges_preserved_in_order() {
        let fuel = Surcharge::new("375", Some("Fuel Surcharge".to_string()), money("1.50"));
        let residential = Surcharge::new("270", None, money("4.20"));

        let quote = RateQuote::builder(CarrierId::new("ups"), "03", "UPS Ground", money("21.20"))
            .surcharges(vec![fuel.clone(), residential.clone()])
            .build();

        assert_eq!(quote.surcharges(), &[fuel, residential]);
    }

    #[test]
    fn guaranteed_and_transit() {
        let quote = RateQuote::builder(
            CarrierId::new("ups"),
            "01",
            "UPS Next Day Air",
            money("45.00"),
        )
        .service_level(ServiceLevel::Overnight)
        .transit_days(1)
        .guaranteed(true)
        .estimated_delivery("2026-08-07")
        .build();

        assert!(quote.is_guaranteed());
        assert_eq!(quote.transit_days(), Some(1));
        assert_eq!(quote.estimated_delivery(), Some("2026-08-07"));
        assert_eq!(quote.service_level(), Some(ServiceLevel::Overnight));
    }

    #[test]
    fn display() {
        let display = test_quote().to_string();
        assert!(display.contains("ups"));
        assert!(display.contains("15.50"));
    }
}
