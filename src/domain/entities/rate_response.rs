//! # Rate Response
//!
//! Aggregated result of a rate-shopping call.
//!
//! This module provides the [`RateResponse`] returned by the rate-shopping
//! service: the price-sorted quotes from every carrier that answered, the
//! resolved carrier set, and the request timestamp.

use crate::domain::entities::rate_quote::RateQuote;
use crate::domain::value_objects::{CarrierId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated quotes from one rate-shopping call.
///
/// Quotes are sorted by total charge, ascending. Carriers that failed are
/// not represented here; when at least one quote was produced, failures are
/// dropped from the response (and logged by the service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResponse {
    /// Quotes sorted by total charge, ascending.
    quotes: Vec<RateQuote>,
    /// Carriers that were queried.
    carriers: Vec<CarrierId>,
    /// When the rate-shopping call started.
    requested_at: Timestamp,
}

impl RateResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(quotes: Vec<RateQuote>, carriers: Vec<CarrierId>, requested_at: Timestamp) -> Self {
        Self {
            quotes,
            carriers,
            requested_at,
        }
    }

    /// Returns the quotes, sorted by total charge ascending.
    #[inline]
    #[must_use]
    pub fn quotes(&self) -> &[RateQuote] {
        &self.quotes
    }

    /// Returns the carriers that were queried.
    #[inline]
    #[must_use]
    pub fn carriers(&self) -> &[CarrierId] {
        &self.carriers
    }

    /// Returns when the rate-shopping call started.
    #[inline]
    #[must_use]
    pub fn requested_at(&self) -> Timestamp {
        self.requested_at
    }

    /// Returns the cheapest quote, if any.
    #[must_use]
    pub fn cheapest(&self) -> Option<&RateQuote> {
        self.quotes.first()
    }

    /// Returns the number of quotes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no quotes were produced.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl fmt::Display for RateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RateResponse({} quote(s) from {} carrier(s))",
            self.quotes.len(),
            self.carriers.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn quote(value: &str) -> RateQuote {
        RateQuote::builder(
            CarrierId::new("ups"),
            "03",
            "UPS Ground",
            Money::new(Decimal::from_str(value).unwrap(), "USD"),
        )
        .build()
    }

    #[test]
    fn cheapest_is_first() {
        let response = RateResponse::new(
            vec![quote("15.50"), quote("28.75")],
            vec![CarrierId::new("ups")],
            Timestamp::now(),
        );

        assert_eq!(response.len(), 2);
        assert_eq!(
            response.cheapest().unwrap().total_charges().amount(),
            Decimal::from_str("15.50").unwrap()
        );
    }

    #[test]
    fn empty_response() {
        let response = RateResponse::new(Vec::new(), Vec::new(), Timestamp::now());
        assert!(response.is_empty());
        assert!(response.cheapest().is_none());
    }

    #[test]
    fn display() {
        let response = RateResponse::new(
            vec![quote("15.50")],
            vec![CarrierId::new("ups")],
            Timestamp::now(),
        );
        assert_eq!(response.to_string(), "RateResponse(1 quote(s) from 1 carrier(s))");
    }
}
