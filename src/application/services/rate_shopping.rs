//! # Rate Shopping Service
//!
//! Fan-out across registered carriers with partial-failure tolerance.
//!
//! This module provides the [`RateShoppingService`], the crate's inbound
//! contract. One `get_quotes` call validates the request, resolves the
//! carrier set, dispatches every provider concurrently, and aggregates the
//! results: all successful quotes are merged and price-sorted, and failures
//! are surfaced only when nothing useful was returned.

use crate::domain::entities::rate_request::RateRequest;
use crate::domain::entities::rate_response::RateResponse;
use crate::domain::errors::{CarrierError, CarrierResult};
use crate::domain::validation;
use crate::domain::value_objects::{CarrierId, Timestamp};
use crate::infrastructure::carriers::registry::CarrierRegistry;
use crate::infrastructure::carriers::traits::{CarrierOperation, CarrierProvider};
use std::sync::Arc;

/// Aggregates rate quotes across registered carrier backends.
///
/// The registry is resolved at construction and treated as read-only; the
/// service itself is stateless and can be shared freely.
#[derive(Debug, Clone)]
pub struct RateShoppingService {
    registry: Arc<CarrierRegistry>,
}

impl RateShoppingService {
    /// Creates a service over a startup-built registry.
    #[must_use]
    pub fn new(registry: Arc<CarrierRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the underlying registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &CarrierRegistry {
        &self.registry
    }

    /// Fetches quotes from every resolved carrier and aggregates them.
    ///
    /// Providers run as independent tasks: one carrier's failure never
    /// cancels or blocks another's success. When at least one quote was
    /// produced, failures are dropped from the response (logged at `warn`);
    /// when no quotes were produced and at least one carrier failed, the
    /// first collected failure is returned.
    ///
    /// # Errors
    ///
    /// - Validation error before any network activity for a request that
    ///   fails the domain schema
    /// - Carrier-unavailable error when the request restricts to an
    ///   unregistered carrier
    /// - The first collected carrier failure when no quotes were produced
    pub async fn get_quotes(&self, request: &RateRequest) -> CarrierResult<RateResponse> {
        validation::validate(request)?;

        let providers = self.resolve_providers(request)?;
        let carrier_ids: Vec<CarrierId> = providers
            .iter()
            .map(|provider| provider.carrier_id().clone())
            .collect();
        let requested_at = Timestamp::now();

        tracing::debug!(carriers = ?carrier_ids, "dispatching rate requests");

        let mut handles = Vec::with_capacity(providers.len());
        for provider in providers {
            let request = request.clone();
            let carrier_id = provider.carrier_id().clone();
            let handle = tokio::spawn(async move { provider.get_rates(&request).await });
            handles.push((carrier_id, handle));
        }

        let mut quotes = Vec::new();
        let mut failures = Vec::new();
        for (carrier_id, handle) in handles {
            match handle.await {
                Ok(Ok(carrier_quotes)) => quotes.extend(carrier_quotes),
                Ok(Err(error)) => failures.push(error),
                Err(join_error) => failures.push(CarrierError::unknown(
                    carrier_id,
                    format!("rating task failed: {join_error}"),
                )),
            }
        }

        if quotes.is_empty() {
            if let Some(first) = failures.into_iter().next() {
                return Err(first);
            }
        } else {
            for failure in &failures {
                tracing::warn!(
                    carrier = failure.carrier().map_or("unknown", CarrierId::as_str),
                    kind = %failure.kind(),
                    message = failure.message(),
                    "dropping carrier failure from aggregated response"
                );
            }
        }

        quotes.sort_by(|a, b| a.total_charges().amount().cmp(&b.total_charges().amount()));

        Ok(RateResponse::new(quotes, carrier_ids, requested_at))
    }

    fn resolve_providers(
        &self,
        request: &RateRequest,
    ) -> CarrierResult<Vec<Arc<dyn CarrierProvider>>> {
        match request.carriers() {
            Some(ids) => ids.iter().map(|id| self.registry.get(id)).collect(),
            None => {
                let providers = self.registry.providers_supporting(CarrierOperation::Rate);
                if providers.is_empty() {
                    return Err(CarrierError::configuration(
                        "no registered carrier supports rating",
                    ));
                }
                Ok(providers)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::address::Address;
    use crate::domain::entities::package::{Dimensions, Package, Weight};
    use crate::domain::entities::rate_quote::RateQuote;
    use crate::domain::errors::CarrierErrorKind;
    use crate::domain::value_objects::{DimensionUnit, Money, WeightUnit};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct MockProvider {
        carrier_id: CarrierId,
        result: Mutex<Option<CarrierResult<Vec<RateQuote>>>>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn succeeding(id: &str, prices: &[&str]) -> Self {
            let quotes = prices
                .iter()
                .map(|price| {
                    RateQuote::builder(
                        CarrierId::new(id),
                        "03",
                        "Ground",
                        Money::new(Decimal::from_str(price).unwrap(), "USD"),
                    )
                    .build()
                })
                .collect();
            Self {
                carrier_id: CarrierId::new(id),
                result: Mutex::new(Some(Ok(quotes))),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(id: &str, error: CarrierError) -> Self {
            Self {
                carrier_id: CarrierId::new(id),
                result: Mutex::new(Some(Err(error))),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CarrierProvider for MockProvider {
        fn carrier_id(&self) -> &CarrierId {
            &self.carrier_id
        }

        fn supports(&self, operation: CarrierOperation) -> bool {
            matches!(operation, CarrierOperation::Rate)
        }

        async fn get_rates(&self, _request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn test_request() -> RateRequest {
        let origin = Address::new(
            "Shipper",
            vec!["1 Dock St".to_string()],
            "Louisville",
            "KY",
            "40201",
            "US",
        );
        let destination = Address::new(
            "Recipient",
            vec!["9 Elm St".to_string()],
            "Portland",
            "OR",
            "97201",
            "US",
        );
        let package = Package::new(
            Dimensions::new(
                Decimal::from(10),
                Decimal::from(6),
                Decimal::from(4),
                DimensionUnit::Inch,
            ),
            Weight::new(Decimal::from(2), WeightUnit::Pound),
        );
        RateRequest::builder(origin, destination)
            .package(package)
            .build()
    }

    fn service_with(providers: Vec<Arc<dyn CarrierProvider>>) -> RateShoppingService {
        let mut registry = CarrierRegistry::new();
        for provider in providers {
            registry.register(provider).unwrap();
        }
        RateShoppingService::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn merges_and_sorts_across_carriers() {
        let service = service_with(vec![
            Arc::new(MockProvider::succeeding("ups", &["28.75", "45.00"])),
            Arc::new(MockProvider::succeeding("dhl", &["15.50"])),
        ]);

        let response = service.get_quotes(&test_request()).await.unwrap();
        let totals: Vec<String> = response
            .quotes()
            .iter()
            .map(|quote| quote.total_charges().amount().to_string())
            .collect();
        assert_eq!(totals, vec!["15.50", "28.75", "45.00"]);
        assert_eq!(response.carriers().len(), 2);
    }

    #[tokio::test]
    async fn partial_failure_returns_surviving_quotes() {
        let service = service_with(vec![
            Arc::new(MockProvider::succeeding("ups", &["15.50"])),
            Arc::new(MockProvider::failing(
                "dhl",
                CarrierError::timeout("dhl", "request timed out"),
            )),
        ]);

        let response = service.get_quotes(&test_request()).await.unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(
            response.cheapest().unwrap().carrier(),
            &CarrierId::new("ups")
        );
    }

    #[tokio::test]
    async fn total_failure_raises_first_error() {
        let service = service_with(vec![
            Arc::new(MockProvider::failing(
                "aaa",
                CarrierError::auth_failure("aaa", "bad credentials"),
            )),
            Arc::new(MockProvider::failing(
                "bbb",
                CarrierError::timeout("bbb", "request timed out"),
            )),
        ]);

        let request = RateRequest::builder(
            test_request().origin().clone(),
            test_request().destination().clone(),
        )
        .packages(test_request().packages().to_vec())
        .carriers(vec![CarrierId::new("aaa"), CarrierId::new("bbb")])
        .build();

        let error = service.get_quotes(&request).await.unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::AuthFailure);
        assert_eq!(error.carrier(), Some(&CarrierId::new("aaa")));
    }

    #[tokio::test]
    async fn validation_gate_blocks_dispatch() {
        let provider = Arc::new(MockProvider::succeeding("ups", &["15.50"]));
        let service = service_with(vec![provider.clone()]);

        let empty_request = RateRequest::builder(
            test_request().origin().clone(),
            test_request().destination().clone(),
        )
        .build();

        let error = service.get_quotes(&empty_request).await.unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::Validation);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_carrier_restriction_fails_before_dispatch() {
        let provider = Arc::new(MockProvider::succeeding("ups", &["15.50"]));
        let service = service_with(vec![provider.clone()]);

        let request = RateRequest::builder(
            test_request().origin().clone(),
            test_request().destination().clone(),
        )
        .packages(test_request().packages().to_vec())
        .carriers(vec![CarrierId::new("fedex")])
        .build();

        let error = service.get_quotes(&request).await.unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::CarrierUnavailable);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_registry_is_configuration_error() {
        let service = RateShoppingService::new(Arc::new(CarrierRegistry::new()));

        let error = service.get_quotes(&test_request()).await.unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::Configuration);
    }

    #[tokio::test]
    async fn all_empty_successes_yield_empty_response() {
        let provider = Arc::new(MockProvider::succeeding("ups", &[]));
        let service = service_with(vec![provider]);

        let response = service.get_quotes(&test_request()).await.unwrap();
        assert!(response.is_empty());
    }
}
