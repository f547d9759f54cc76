//! # Rate Shop
//!
//! Carrier-agnostic shipping rate aggregation with pluggable carrier
//! backends.
//!
//! The crate accepts a normalized shipment description (origin, destination,
//! packages) and returns normalized price quotes, delegating to one or more
//! carrier-specific backends. Each backend is a carrier client triad: an
//! OAuth token lifecycle manager with single-flight acquisition, an
//! authenticated transport with failure classification and a single retry
//! after an authentication rejection, and a bidirectional mapper between the
//! carrier-agnostic domain model and the carrier's wire format.
//!
//! ## Layers
//!
//! - [`domain`]: Data contracts, value objects, the carrier error taxonomy,
//!   and request validation. No I/O, no carrier vocabulary.
//! - [`infrastructure`]: The carrier provider port, the startup-built
//!   registry, and the UPS backend.
//! - [`application`]: The rate-shopping service fanning out across
//!   registered carriers with partial-failure tolerance.
//!
//! ## Example
//!
//! ```no_run
//! use rate_shop::application::RateShoppingService;
//! use rate_shop::domain::entities::{Address, Dimensions, Package, RateRequest, Weight};
//! use rate_shop::domain::value_objects::{DimensionUnit, WeightUnit};
//! use rate_shop::infrastructure::carriers::CarrierRegistry;
//! use rate_shop::infrastructure::carriers::ups::{UpsConfig, UpsProvider};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), rate_shop::domain::CarrierError> {
//! let mut registry = CarrierRegistry::new();
//! registry.register(Arc::new(UpsProvider::new(UpsConfig::from_env()?)?))?;
//! let service = RateShoppingService::new(Arc::new(registry));
//!
//! let origin = Address::new("Shipper", vec!["1 Dock St".into()], "Louisville", "KY", "40201", "US");
//! let destination = Address::new("Recipient", vec!["9 Elm St".into()], "Portland", "OR", "97201", "US");
//! let package = Package::new(
//!     Dimensions::new(Decimal::from(12), Decimal::from(8), Decimal::from(4), DimensionUnit::Inch),
//!     Weight::new(Decimal::from(5), WeightUnit::Pound),
//! );
//! let request = RateRequest::builder(origin, destination).package(package).build();
//!
//! let response = service.get_quotes(&request).await?;
//! for quote in response.quotes() {
//!     println!("{} {}: {}", quote.carrier(), quote.service_name(), quote.total_charges());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
