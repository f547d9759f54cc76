//! # UPS Provider
//!
//! Rating operation for the UPS backend.
//!
//! One `get_rates` call maps the domain request into wire format, posts it
//! through the authenticated transport, normalizes the response's
//! single-or-array rated-shipment field into a sequence, maps every rated
//! shipment into a [`RateQuote`], and stable-sorts the quotes by total
//! charge so ties keep carrier-reported order.

use crate::domain::entities::rate_quote::RateQuote;
use crate::domain::entities::rate_request::RateRequest;
use crate::domain::errors::{CarrierError, CarrierResult};
use crate::domain::value_objects::CarrierId;
use crate::infrastructure::carriers::traits::{CarrierOperation, CarrierProvider};
use crate::infrastructure::carriers::ups::CARRIER_ID;
use crate::infrastructure::carriers::ups::config::UpsConfig;
use crate::infrastructure::carriers::ups::mapper::{
    self, REQUEST_OPTION_RATE, REQUEST_OPTION_SHOP,
};
use crate::infrastructure::carriers::ups::token::TokenManager;
use crate::infrastructure::carriers::ups::transport::UpsTransport;
use crate::infrastructure::carriers::ups::wire::WireRateResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// UPS carrier backend.
///
/// Owns its HTTP client, token manager, and transport; a single instance is
/// registered in the carrier registry and shared behind `Arc`.
#[derive(Debug)]
pub struct UpsProvider {
    carrier_id: CarrierId,
    config: Arc<UpsConfig>,
    transport: UpsTransport,
}

impl UpsProvider {
    /// Creates a backend from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: UpsConfig) -> CarrierResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|error| {
                CarrierError::configuration(format!("failed to build HTTP client: {error}"))
            })?;
        let tokens = TokenManager::new(http.clone(), Arc::clone(&config));
        let transport = UpsTransport::new(http, Arc::clone(&config), tokens);

        Ok(Self {
            carrier_id: CarrierId::new(CARRIER_ID),
            config,
            transport,
        })
    }

    /// Returns the token manager, exposed for observability and tests.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        self.transport.tokens()
    }

    async fn fetch_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
        let option = if request.service_level().is_some() {
            REQUEST_OPTION_RATE
        } else {
            REQUEST_OPTION_SHOP
        };
        let path = format!("/api/rating/{}/{}", self.config.api_version(), option);
        let shipper_number = request
            .shipper_number()
            .unwrap_or(self.config.account_number());
        let wire = mapper::build_rate_request(request, shipper_number);

        tracing::debug!(carrier = CARRIER_ID, mode = option, "requesting rates");

        let response = self.transport.send(&path, &wire).await?;
        quotes_from_response(response, &self.carrier_id)
    }
}

/// Parses a raw rating response into price-sorted quotes.
///
/// Accepts both the single-object and array forms of the rated-shipment
/// field; a missing wrapper or missing field is a malformed response.
pub(crate) fn quotes_from_response(
    response: Value,
    carrier: &CarrierId,
) -> CarrierResult<Vec<RateQuote>> {
    let parsed: WireRateResponse = serde_json::from_value(response).map_err(|error| {
        CarrierError::malformed_response(
            carrier.clone(),
            format!("rate response could not be interpreted: {error}"),
        )
    })?;
    let body = parsed.rate_response.ok_or_else(|| {
        CarrierError::malformed_response(carrier.clone(), "response is missing RateResponse")
    })?;
    let rated = body
        .rated_shipment
        .ok_or_else(|| {
            CarrierError::malformed_response(carrier.clone(), "response is missing RatedShipment")
        })?
        .into_vec();

    let mut quotes = rated
        .into_iter()
        .map(|shipment| mapper::quote_from_rated_shipment(shipment, carrier))
        .collect::<CarrierResult<Vec<_>>>()?;
    quotes.sort_by(|a, b| a.total_charges().amount().cmp(&b.total_charges().amount()));

    Ok(quotes)
}

#[async_trait]
impl CarrierProvider for UpsProvider {
    fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    fn supports(&self, operation: CarrierOperation) -> bool {
        matches!(operation, CarrierOperation::Rate)
    }

    async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
        self.fetch_rates(request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::CarrierErrorKind;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn carrier() -> CarrierId {
        CarrierId::new("ups")
    }

    fn rated(code: &str, total: &str) -> Value {
        json!({
            "Service": { "Code": code },
            "TotalCharges": { "CurrencyCode": "USD", "MonetaryValue": total }
        })
    }

    #[test]
    fn quotes_sorted_by_total_ascending() {
        let response = json!({
            "RateResponse": {
                "RatedShipment": [
                    rated("02", "28.75"),
                    rated("03", "15.50"),
                    rated("01", "45.00")
                ]
            }
        });

        let quotes = quotes_from_response(response, &carrier()).unwrap();
        let totals: Vec<Decimal> = quotes
            .iter()
            .map(|quote| quote.total_charges().amount())
            .collect();
        assert_eq!(
            totals,
            vec![
                Decimal::from_str("15.50").unwrap(),
                Decimal::from_str("28.75").unwrap(),
                Decimal::from_str("45.00").unwrap()
            ]
        );
    }

    #[test]
    fn ties_keep_carrier_order() {
        let response = json!({
            "RateResponse": {
                "RatedShipment": [
                    rated("12", "20.00"),
                    rated("03", "20.00")
                ]
            }
        });

        let quotes = quotes_from_response(response, &carrier()).unwrap();
        assert_eq!(quotes[0].service_code(), "12");
        assert_eq!(quotes[1].service_code(), "03");
    }

    #[test]
    fn single_object_and_array_map_identically() {
        let as_object = json!({
            "RateResponse": { "RatedShipment": rated("03", "15.50") }
        });
        let as_array = json!({
            "RateResponse": { "RatedShipment": [rated("03", "15.50")] }
        });

        let from_object = quotes_from_response(as_object, &carrier()).unwrap();
        let from_array = quotes_from_response(as_array, &carrier()).unwrap();
        assert_eq!(from_object, from_array);
        assert_eq!(from_object.len(), 1);
    }

    #[test]
    fn missing_wrapper_is_malformed() {
        let error = quotes_from_response(json!({ "ok": true }), &carrier()).unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::MalformedResponse);
        assert!(error.message().contains("RateResponse"));
    }

    #[test]
    fn missing_rated_shipment_is_malformed() {
        let response = json!({ "RateResponse": { "Response": {} } });
        let error = quotes_from_response(response, &carrier()).unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::MalformedResponse);
        assert!(error.message().contains("RatedShipment"));
    }
}
