//! # Rate Request
//!
//! Normalized shipment description submitted for rating.
//!
//! This module provides the [`RateRequest`] consumed by the rate-shopping
//! service and every carrier provider. Requests are built once through
//! [`RateRequestBuilder`] and consumed read-only; schema validation happens
//! in [`crate::domain::validation`], not at construction time.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::entities::address::Address;
//! use rate_shop::domain::entities::package::{Dimensions, Package, Weight};
//! use rate_shop::domain::entities::rate_request::RateRequest;
//! use rate_shop::domain::value_objects::{DimensionUnit, ServiceLevel, WeightUnit};
//! use rust_decimal::Decimal;
//!
//! let origin = Address::new("Shipper", vec!["1 Dock St".to_string()], "Louisville", "KY", "40201", "US");
//! let destination = Address::new("Recipient", vec!["9 Elm St".to_string()], "Portland", "OR", "97201", "US");
//! let package = Package::new(
//!     Dimensions::new(Decimal::from(10), Decimal::from(6), Decimal::from(4), DimensionUnit::Inch),
//!     Weight::new(Decimal::from(2), WeightUnit::Pound),
//! );
//!
//! let request = RateRequest::builder(origin, destination)
//!     .package(package)
//!     .service_level(ServiceLevel::Ground)
//!     .build();
//!
//! assert_eq!(request.packages().len(), 1);
//! assert_eq!(request.service_level(), Some(ServiceLevel::Ground));
//! ```

use crate::domain::entities::address::Address;
use crate::domain::entities::package::Package;
use crate::domain::value_objects::{CarrierId, ServiceLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized request for shipping rate quotes.
///
/// # Invariants (enforced by [`crate::domain::validation`])
///
/// - Between 1 and 50 packages
/// - Origin and destination carry valid alpha-2 country codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Shipment origin.
    origin: Address,
    /// Shipment destination.
    destination: Address,
    /// Packages in shipment order.
    packages: Vec<Package>,
    /// Optional restriction to a single service level.
    service_level: Option<ServiceLevel>,
    /// Optional restriction to a set of carriers.
    carriers: Option<Vec<CarrierId>>,
    /// Optional shipper account override.
    shipper_number: Option<String>,
}

impl RateRequest {
    /// Starts building a rate request.
    #[must_use]
    pub fn builder(origin: Address, destination: Address) -> RateRequestBuilder {
        RateRequestBuilder::new(origin, destination)
    }

    /// Returns the shipment origin.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &Address {
        &self.origin
    }

    /// Returns the shipment destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Address {
        &self.destination
    }

    /// Returns the packages in shipment order.
    #[inline]
    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Returns the requested service level, if restricted.
    #[inline]
    #[must_use]
    pub fn service_level(&self) -> Option<ServiceLevel> {
        self.service_level
    }

    /// Returns the requested carrier set, if restricted.
    #[inline]
    #[must_use]
    pub fn carriers(&self) -> Option<&[CarrierId]> {
        self.carriers.as_deref()
    }

    /// Returns the shipper account override, if set.
    #[inline]
    #[must_use]
    pub fn shipper_number(&self) -> Option<&str> {
        self.shipper_number.as_deref()
    }
}

impl fmt::Display for RateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RateRequest({} -> {}, {} package(s))",
            self.origin,
            self.destination,
            self.packages.len()
        )
    }
}

/// Builder for [`RateRequest`].
///
/// Construction never fails; schema validation is a separate explicit step
/// performed by the rate-shopping service before dispatch.
#[derive(Debug, Clone)]
pub struct RateRequestBuilder {
    origin: Address,
    destination: Address,
    packages: Vec<Package>,
    service_level: Option<ServiceLevel>,
    carriers: Option<Vec<CarrierId>>,
    shipper_number: Option<String>,
}

impl RateRequestBuilder {
    /// Creates a builder for a shipment between the given addresses.
    #[must_use]
    pub fn new(origin: Address, destination: Address) -> Self {
        Self {
            origin,
            destination,
            packages: Vec::new(),
            service_level: None,
            carriers: None,
            shipper_number: None,
        }
    }

    /// Adds one package.
    #[must_use]
    pub fn package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// Adds several packages, preserving order.
    #[must_use]
    pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
        self.packages.extend(packages);
        self
    }

    /// Restricts the request to one service level.
    #[must_use]
    pub fn service_level(mut self, service_level: ServiceLevel) -> Self {
        self.service_level = Some(service_level);
        self
    }

    /// Restricts the request to the given carriers.
    #[must_use]
    pub fn carriers(mut self, carriers: Vec<CarrierId>) -> Self {
        self.carriers = Some(carriers);
        self
    }

    /// Overrides the shipper account number.
    #[must_use]
    pub fn shipper_number(mut self, shipper_number: impl Into<String>) -> Self {
        self.shipper_number = Some(shipper_number.into());
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> RateRequest {
        RateRequest {
            origin: self.origin,
            destination: self.destination,
            packages: self.packages,
            service_level: self.service_level,
            carriers: self.carriers,
            shipper_number: self.shipper_number,
        }
    }
}
