//! # Address Value
//!
//! Carrier-agnostic postal address.
//!
//! This module provides the [`Address`] type describing one end of a
//! shipment. Addresses are constructed once per request and never mutated.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::entities::address::Address;
//!
//! let origin = Address::new(
//!     "Acme Fulfillment",
//!     vec!["100 Warehouse Way".to_string()],
//!     "Louisville",
//!     "KY",
//!     "40201",
//!     "US",
//! );
//! assert!(!origin.is_residential());
//!
//! let home = origin.clone().with_residential();
//! assert!(home.is_residential());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address for shipment origin or destination.
///
/// # Invariants
///
/// - Between one and three street lines (enforced by request validation)
/// - Country is an ISO-3166-1 alpha-2 code (enforced by request validation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Contact or company name.
    name: String,
    /// Street lines, 1-3 entries.
    street_lines: Vec<String>,
    /// City name.
    city: String,
    /// State or province code.
    state_province: String,
    /// Postal code.
    postal_code: String,
    /// ISO-3166-1 alpha-2 country code.
    country: String,
    /// True if this is a residential delivery point.
    residential: bool,
}

impl Address {
    /// Creates a new non-residential address.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        street_lines: Vec<String>,
        city: impl Into<String>,
        state_province: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street_lines,
            city: city.into(),
            state_province: state_province.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            residential: false,
        }
    }

    /// Marks the address as a residential delivery point.
    #[must_use]
    pub fn with_residential(mut self) -> Self {
        self.residential = true;
        self
    }

    /// Returns the contact or company name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the street lines.
    #[inline]
    #[must_use]
    pub fn street_lines(&self) -> &[String] {
        &self.street_lines
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state or province code.
    #[inline]
    #[must_use]
    pub fn state_province(&self) -> &str {
        &self.state_province
    }

    /// Returns the postal code.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Returns the ISO-3166-1 alpha-2 country code.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns true if this is a residential delivery point.
    #[inline]
    #[must_use]
    pub fn is_residential(&self) -> bool {
        self.residential
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} {}",
            self.city, self.state_province, self.postal_code, self.country
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_address() -> Address {
        Address::new(
            "Acme Fulfillment",
            vec!["100 Warehouse Way".to_string()],
            "Louisville",
            "KY",
            "40201",
            "US",
        )
    }

    #[test]
    fn new_defaults_to_commercial() {
        let address = test_address();
        assert!(!address.is_residential());
        assert_eq!(address.name(), "Acme Fulfillment");
        assert_eq!(address.country(), "US");
    }

    #[test]
    fn with_residential() {
        let address = test_address().with_residential();
        assert!(address.is_residential());
    }

    #[test]
    fn display() {
        let display = test_address().to_string();
        assert!(display.contains("Louisville"));
        assert!(display.contains("40201"));
    }
}
