//! # Carrier Registry
//!
//! Lookup table from carrier identifier to provider instance.
//!
//! The registry is assembled once at startup and treated as read-only by the
//! rate-shopping service afterwards; it is a plain `HashMap` behind `&self`
//! lookups, with no interior mutability.
//!
//! # Examples
//!
//! ```ignore
//! use rate_shop::infrastructure::carriers::registry::CarrierRegistry;
//!
//! let mut registry = CarrierRegistry::new();
//! registry.register(Arc::new(provider))?;
//! let provider = registry.get(&CarrierId::new("ups"))?;
//! ```

use crate::domain::errors::{CarrierError, CarrierResult};
use crate::domain::value_objects::CarrierId;
use crate::infrastructure::carriers::traits::{CarrierOperation, CarrierProvider};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of carrier providers keyed by carrier identifier.
#[derive(Default)]
pub struct CarrierRegistry {
    providers: HashMap<CarrierId, Arc<dyn CarrierProvider>>,
}

impl CarrierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under its own carrier id.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a provider is already registered
    /// under the same id.
    pub fn register(&mut self, provider: Arc<dyn CarrierProvider>) -> CarrierResult<()> {
        let id = provider.carrier_id().clone();
        if self.providers.contains_key(&id) {
            return Err(CarrierError::configuration(format!(
                "carrier '{id}' is already registered"
            )));
        }
        self.providers.insert(id, provider);
        Ok(())
    }

    /// Looks up a provider by carrier id.
    ///
    /// # Errors
    ///
    /// Returns a carrier-unavailable error for an unknown id.
    pub fn get(&self, id: &CarrierId) -> CarrierResult<Arc<dyn CarrierProvider>> {
        self.providers.get(id).cloned().ok_or_else(|| {
            CarrierError::carrier_unavailable(id.clone(), format!("carrier '{id}' is not registered"))
        })
    }

    /// Returns every provider supporting the given operation.
    #[must_use]
    pub fn providers_supporting(&self, operation: CarrierOperation) -> Vec<Arc<dyn CarrierProvider>> {
        let mut providers: Vec<Arc<dyn CarrierProvider>> = self
            .providers
            .values()
            .filter(|provider| provider.supports(operation))
            .cloned()
            .collect();
        providers.sort_by(|a, b| a.carrier_id().cmp(b.carrier_id()));
        providers
    }

    /// Returns the registered carrier ids in sorted order.
    #[must_use]
    pub fn carrier_ids(&self) -> Vec<CarrierId> {
        let mut ids: Vec<CarrierId> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the number of registered providers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no providers are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for CarrierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierRegistry")
            .field("carriers", &self.carrier_ids())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::rate_quote::RateQuote;
    use crate::domain::entities::rate_request::RateRequest;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct StubProvider {
        carrier_id: CarrierId,
        rates: bool,
    }

    impl StubProvider {
        fn rating(id: &str) -> Self {
            Self {
                carrier_id: CarrierId::new(id),
                rates: true,
            }
        }

        fn tracking_only(id: &str) -> Self {
            Self {
                carrier_id: CarrierId::new(id),
                rates: false,
            }
        }
    }

    #[async_trait]
    impl CarrierProvider for StubProvider {
        fn carrier_id(&self) -> &CarrierId {
            &self.carrier_id
        }

        fn supports(&self, operation: CarrierOperation) -> bool {
            match operation {
                CarrierOperation::Rate => self.rates,
                CarrierOperation::Label => false,
                CarrierOperation::Track => !self.rates,
            }
        }

        async fn get_rates(&self, _request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = CarrierRegistry::new();
        registry.register(Arc::new(StubProvider::rating("ups"))).unwrap();

        let provider = registry.get(&CarrierId::new("ups")).unwrap();
        assert_eq!(provider.carrier_id(), &CarrierId::new("ups"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = CarrierRegistry::new();
        registry.register(Arc::new(StubProvider::rating("ups"))).unwrap();

        let error = registry
            .register(Arc::new(StubProvider::rating("ups")))
            .unwrap_err();
        assert_eq!(
            error.kind(),
            crate::domain::errors::CarrierErrorKind::Configuration
        );
    }

    #[test]
    fn unknown_id_is_unavailable() {
        let registry = CarrierRegistry::new();
        let error = registry.get(&CarrierId::new("fedex")).unwrap_err();
        assert_eq!(
            error.kind(),
            crate::domain::errors::CarrierErrorKind::CarrierUnavailable
        );
        assert_eq!(error.carrier().map(|c| c.as_str()), Some("fedex"));
    }

    #[test]
    fn providers_supporting_filters_by_operation() {
        let mut registry = CarrierRegistry::new();
        registry.register(Arc::new(StubProvider::rating("ups"))).unwrap();
        registry
            .register(Arc::new(StubProvider::tracking_only("fedex")))
            .unwrap();

        let raters = registry.providers_supporting(CarrierOperation::Rate);
        assert_eq!(raters.len(), 1);
        assert_eq!(raters[0].carrier_id(), &CarrierId::new("ups"));

        let trackers = registry.providers_supporting(CarrierOperation::Track);
        assert_eq!(trackers.len(), 1);
    }

    #[test]
    fn carrier_ids_sorted() {
        let mut registry = CarrierRegistry::new();
        registry.register(Arc::new(StubProvider::rating("ups"))).unwrap();
        registry.register(Arc::new(StubProvider::rating("dhl"))).unwrap();

        let ids = registry.carrier_ids();
        assert_eq!(ids, vec![CarrierId::new("dhl"), CarrierId::new("ups")]);
    }
}
