//! # Carrier Provider Trait
//!
//! Port definition for carrier integrations.
//!
//! This module defines the [`CarrierProvider`] trait that all carrier
//! backends implement, plus the [`CarrierOperation`] capability tags the
//! registry filters on. Rating is the only operation with shipped
//! implementations; label purchase and tracking exist as capability tags so
//! future backends can advertise them without changing the port.
//!
//! # Examples
//!
//! ```ignore
//! use rate_shop::infrastructure::carriers::traits::{CarrierOperation, CarrierProvider};
//!
//! // Implement CarrierProvider for your carrier backend
//! struct MyCarrierProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CarrierProvider for MyCarrierProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::rate_quote::RateQuote;
use crate::domain::entities::rate_request::RateRequest;
use crate::domain::errors::CarrierResult;
use crate::domain::value_objects::CarrierId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations a carrier backend may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarrierOperation {
    /// Fetch rate quotes.
    Rate,
    /// Purchase shipping labels.
    Label,
    /// Track shipments.
    Track,
}

impl fmt::Display for CarrierOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate => write!(f, "RATE"),
            Self::Label => write!(f, "LABEL"),
            Self::Track => write!(f, "TRACK"),
        }
    }
}

/// Trait defining the interface for carrier backends.
///
/// All carrier integrations implement this trait to give the rate-shopping
/// service a uniform interface. Implementations own their wire format,
/// authentication, and error classification; every failure surfaces as a
/// [`crate::domain::errors::CarrierError`].
///
/// # Async Methods
///
/// Rating is async to support non-blocking I/O against the carrier API.
#[async_trait]
pub trait CarrierProvider: Send + Sync + fmt::Debug {
    /// Returns the carrier ID.
    fn carrier_id(&self) -> &CarrierId;

    /// Returns true if this backend supports the given operation.
    fn supports(&self, operation: CarrierOperation) -> bool;

    /// Fetches rate quotes for the request.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated rate request
    ///
    /// # Returns
    ///
    /// Quotes sorted by total charge ascending, or a classified error.
    ///
    /// # Errors
    ///
    /// Any variant of the carrier error taxonomy, depending on where the
    /// call failed (authentication, transport, carrier API, mapping).
    async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display() {
        assert_eq!(CarrierOperation::Rate.to_string(), "RATE");
        assert_eq!(CarrierOperation::Label.to_string(), "LABEL");
        assert_eq!(CarrierOperation::Track.to_string(), "TRACK");
    }
}
