//! # UPS Backend
//!
//! Carrier client for the UPS rating API.
//!
//! The backend is the carrier client triad: [`token::TokenManager`] owns the
//! OAuth client-credentials lifecycle with single-flight acquisition,
//! [`transport::UpsTransport`] wraps authenticated calls with failure
//! classification and a single retry after an authentication rejection, and
//! the mapper translates between the domain model and the carrier's wire
//! format. [`provider::UpsProvider`] composes the triad into the
//! [`crate::infrastructure::carriers::traits::CarrierProvider`] port.
//!
//! All UPS wire vocabulary lives in the crate-private `wire` and `mapper`
//! modules; nothing carrier-specific leaks into the domain layer.

pub mod config;
pub mod provider;
pub mod token;
pub mod transport;

pub(crate) mod mapper;
pub(crate) mod wire;

/// Carrier identifier under which the backend registers.
pub const CARRIER_ID: &str = "ups";

pub use config::UpsConfig;
pub use provider::UpsProvider;
pub use token::{Token, TokenManager};
pub use transport::UpsTransport;
