//! # UPS Wire Format
//!
//! Serde types mirroring the carrier's JSON request and response shapes.
//!
//! Everything in this module is `pub(crate)`: wire vocabulary never crosses
//! the crate's public boundary. Field names follow the carrier's PascalCase
//! convention via serde renames. Response fields that the carrier returns as
//! either a single object or an array are modeled once as [`OneOrMany`] and
//! normalized into a sequence at the parse boundary.

use serde::{Deserialize, Deserializer, Serialize};

/// A value the carrier serializes as either one object or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    /// Single object form.
    One(T),
    /// Array form.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalizes into a sequence.
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Code plus optional description, used for services, units, and packaging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireCodeDescription {
    #[serde(rename = "Code")]
    pub(crate) code: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl WireCodeDescription {
    pub(crate) fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }
}

/// Currency code plus stringified decimal amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireMonetary {
    #[serde(rename = "CurrencyCode")]
    pub(crate) currency_code: String,
    #[serde(rename = "MonetaryValue")]
    pub(crate) monetary_value: String,
}

// ---------------------------------------------------------------------------
// Request side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireRateRequest {
    #[serde(rename = "RateRequest")]
    pub(crate) rate_request: WireRateRequestBody,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireRateRequestBody {
    #[serde(rename = "Request")]
    pub(crate) request: WireRequestSection,
    #[serde(rename = "Shipment")]
    pub(crate) shipment: WireShipment,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireRequestSection {
    /// `"Rate"` for a single-service request, `"Shop"` for all services.
    #[serde(rename = "RequestOption")]
    pub(crate) request_option: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireShipment {
    #[serde(rename = "Shipper")]
    pub(crate) shipper: WireShipper,
    #[serde(rename = "ShipTo")]
    pub(crate) ship_to: WireParty,
    #[serde(rename = "ShipFrom")]
    pub(crate) ship_from: WireParty,
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    pub(crate) service: Option<WireCodeDescription>,
    #[serde(rename = "Package")]
    pub(crate) packages: Vec<WirePackage>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireShipper {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "ShipperNumber")]
    pub(crate) shipper_number: String,
    #[serde(rename = "Address")]
    pub(crate) address: WireAddress,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireParty {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Address")]
    pub(crate) address: WireAddress,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireAddress {
    #[serde(rename = "AddressLine")]
    pub(crate) address_line: Vec<String>,
    #[serde(rename = "City")]
    pub(crate) city: String,
    #[serde(rename = "StateProvinceCode")]
    pub(crate) state_province_code: String,
    #[serde(rename = "PostalCode")]
    pub(crate) postal_code: String,
    #[serde(rename = "CountryCode")]
    pub(crate) country_code: String,
    /// Emitted only for residential delivery points; omission is the
    /// carrier's convention for commercial addresses.
    #[serde(
        rename = "ResidentialAddressIndicator",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) residential_address_indicator: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WirePackage {
    #[serde(rename = "PackagingType")]
    pub(crate) packaging_type: WireCodeDescription,
    #[serde(rename = "Dimensions")]
    pub(crate) dimensions: WireDimensions,
    #[serde(rename = "PackageWeight")]
    pub(crate) package_weight: WirePackageWeight,
    #[serde(rename = "PackageServiceOptions", skip_serializing_if = "Option::is_none")]
    pub(crate) package_service_options: Option<WirePackageServiceOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireDimensions {
    #[serde(rename = "UnitOfMeasurement")]
    pub(crate) unit_of_measurement: WireCodeDescription,
    #[serde(rename = "Length")]
    pub(crate) length: String,
    #[serde(rename = "Width")]
    pub(crate) width: String,
    #[serde(rename = "Height")]
    pub(crate) height: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WirePackageWeight {
    #[serde(rename = "UnitOfMeasurement")]
    pub(crate) unit_of_measurement: WireCodeDescription,
    #[serde(rename = "Weight")]
    pub(crate) weight: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WirePackageServiceOptions {
    #[serde(rename = "DeclaredValue")]
    pub(crate) declared_value: WireMonetary,
}

// ---------------------------------------------------------------------------
// Response side
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct WireRateResponse {
    #[serde(rename = "RateResponse")]
    pub(crate) rate_response: Option<WireRateResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRateResponseBody {
    #[serde(rename = "RatedShipment")]
    pub(crate) rated_shipment: Option<OneOrMany<WireRatedShipment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRatedShipment {
    #[serde(rename = "Service")]
    pub(crate) service: Option<WireCodeDescription>,
    #[serde(rename = "TotalCharges")]
    pub(crate) total_charges: Option<WireMonetary>,
    #[serde(rename = "TransportationCharges")]
    pub(crate) transportation_charges: Option<WireMonetary>,
    #[serde(rename = "ItemizedCharges")]
    pub(crate) itemized_charges: Option<OneOrMany<WireItemizedCharge>>,
    #[serde(rename = "GuaranteedDelivery")]
    pub(crate) guaranteed_delivery: Option<WireGuaranteedDelivery>,
    #[serde(rename = "TimeInTransit")]
    pub(crate) time_in_transit: Option<WireTimeInTransit>,
    #[serde(rename = "BillingWeight")]
    pub(crate) billing_weight: Option<WireBillingWeight>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireItemizedCharge {
    #[serde(rename = "Code")]
    pub(crate) code: Option<String>,
    #[serde(rename = "Description")]
    pub(crate) description: Option<String>,
    #[serde(rename = "CurrencyCode")]
    pub(crate) currency_code: Option<String>,
    #[serde(rename = "MonetaryValue")]
    pub(crate) monetary_value: Option<String>,
}

/// Presence of this block (not its contents) marks a quote as guaranteed.
#[derive(Debug, Deserialize)]
pub(crate) struct WireGuaranteedDelivery {
    #[serde(rename = "BusinessDaysInTransit")]
    pub(crate) business_days_in_transit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTimeInTransit {
    #[serde(rename = "ServiceSummary")]
    pub(crate) service_summary: Option<WireServiceSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireServiceSummary {
    #[serde(rename = "EstimatedArrival")]
    pub(crate) estimated_arrival: Option<WireEstimatedArrival>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireEstimatedArrival {
    #[serde(rename = "BusinessDaysInTransit")]
    pub(crate) business_days_in_transit: Option<String>,
    #[serde(rename = "Arrival")]
    pub(crate) arrival: Option<WireArrival>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireArrival {
    #[serde(rename = "Date")]
    pub(crate) date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireBillingWeight {
    #[serde(rename = "UnitOfMeasurement")]
    pub(crate) unit_of_measurement: Option<WireCodeDescription>,
    #[serde(rename = "Weight")]
    pub(crate) weight: Option<String>,
}

// ---------------------------------------------------------------------------
// OAuth token exchange
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct WireTokenResponse {
    pub(crate) access_token: Option<String>,
    pub(crate) token_type: Option<String>,
    /// Lifetime in seconds; the carrier serializes this as a string.
    #[serde(default, deserialize_with = "de_opt_seconds")]
    pub(crate) expires_in: Option<u64>,
}

fn de_opt_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seconds::Number(value)) => Ok(Some(value)),
        Some(Seconds::Text(value)) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Error body
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct WireErrorResponse {
    pub(crate) response: Option<WireErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireErrorBody {
    #[serde(default)]
    pub(crate) errors: Vec<WireErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireErrorDetail {
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

impl WireErrorResponse {
    /// Extracts the authoritative (first) upstream error from a raw body,
    /// falling back to `UNKNOWN` / `Unknown API error`.
    pub(crate) fn first_error(body: &str) -> (String, String) {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|wrapper| wrapper.response)
            .and_then(|response| response.errors.into_iter().next())
            .map(|detail| {
                (
                    detail.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                    detail
                        .message
                        .unwrap_or_else(|| "Unknown API error".to_string()),
                )
            })
            .unwrap_or_else(|| ("UNKNOWN".to_string(), "Unknown API error".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_or_many_accepts_object() {
        let value = json!({ "Code": "03" });
        let parsed: OneOrMany<WireCodeDescription> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.into_vec().len(), 1);
    }

    #[test]
    fn one_or_many_accepts_array() {
        let value = json!([{ "Code": "03" }, { "Code": "12" }]);
        let parsed: OneOrMany<WireCodeDescription> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.into_vec().len(), 2);
    }

    #[test]
    fn token_expires_in_accepts_string_and_number() {
        let from_string: WireTokenResponse =
            serde_json::from_value(json!({ "access_token": "t", "expires_in": "14399" })).unwrap();
        assert_eq!(from_string.expires_in, Some(14_399));

        let from_number: WireTokenResponse =
            serde_json::from_value(json!({ "access_token": "t", "expires_in": 3600 })).unwrap();
        assert_eq!(from_number.expires_in, Some(3_600));
    }

    #[test]
    fn first_error_extracts_authoritative_entry() {
        let body = json!({
            "response": {
                "errors": [
                    { "code": "110002", "message": "Invalid shipment" },
                    { "code": "999", "message": "secondary" }
                ]
            }
        })
        .to_string();

        let (code, message) = WireErrorResponse::first_error(&body);
        assert_eq!(code, "110002");
        assert_eq!(message, "Invalid shipment");
    }

    #[test]
    fn first_error_falls_back_on_garbage() {
        let (code, message) = WireErrorResponse::first_error("not json at all");
        assert_eq!(code, "UNKNOWN");
        assert_eq!(message, "Unknown API error");
    }

    #[test]
    fn residential_indicator_omitted_when_none() {
        let address = WireAddress {
            address_line: vec!["1 Main St".to_string()],
            city: "Louisville".to_string(),
            state_province_code: "KY".to_string(),
            postal_code: "40201".to_string(),
            country_code: "US".to_string(),
            residential_address_indicator: None,
        };

        let value = serde_json::to_value(&address).unwrap();
        assert!(value.get("ResidentialAddressIndicator").is_none());
        assert_eq!(value["CountryCode"], "US");
    }
}
