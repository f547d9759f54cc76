//! # UPS Transport
//!
//! Authenticated call wrapper with failure classification.
//!
//! [`UpsTransport::send`] obtains a bearer token, issues the call with fresh
//! correlation headers, and classifies every failure into the carrier error
//! taxonomy. A call rejected with HTTP 401 invalidates the cached token and
//! is repeated exactly once with a re-acquired credential; any further
//! failure, including a second 401, is classified and raised. No other
//! retries exist at this layer.

use crate::domain::errors::{CarrierError, CarrierErrorKind, CarrierResult};
use crate::infrastructure::carriers::ups::CARRIER_ID;
use crate::infrastructure::carriers::ups::config::UpsConfig;
use crate::infrastructure::carriers::ups::token::TokenManager;
use crate::infrastructure::carriers::ups::wire::WireErrorResponse;
use reqwest::Client;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Parses a `Retry-After` header of whole seconds into milliseconds.
pub(crate) fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs * 1_000)
}

/// Authenticated HTTP transport for the UPS API.
///
/// Owns the token manager for its account; the rating operation and any
/// future operations share this one transport per backend instance.
#[derive(Debug)]
pub struct UpsTransport {
    http: Client,
    config: Arc<UpsConfig>,
    tokens: TokenManager,
}

impl UpsTransport {
    /// Creates a transport over the given client and token manager.
    #[must_use]
    pub fn new(http: Client, config: Arc<UpsConfig>, tokens: TokenManager) -> Self {
        Self {
            http,
            config,
            tokens,
        }
    }

    /// Returns the token manager owned by this transport.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Performs one authenticated POST against the carrier API.
    ///
    /// On HTTP 401 the cached token is invalidated and the call repeated
    /// exactly once with a fresh credential.
    ///
    /// # Errors
    ///
    /// Every failure is classified into the taxonomy: timeout, network,
    /// rate-limited, auth failure, carrier API error, or malformed
    /// response. Token acquisition failures propagate unchanged and are
    /// never retried here.
    pub async fn send<B: Serialize + Sync>(&self, path: &str, payload: &B) -> CarrierResult<Value> {
        let token = self.tokens.access_token().await?;
        match self.call(path, payload, &token).await {
            Err(error) if is_auth_rejection(&error) => {
                tracing::warn!(
                    carrier = CARRIER_ID,
                    path,
                    "bearer token rejected, re-acquiring and retrying once"
                );
                self.tokens.invalidate();
                let token = self.tokens.access_token().await?;
                self.call(path, payload, &token).await
            }
            result => result,
        }
    }

    async fn call<B: Serialize + Sync>(
        &self,
        path: &str,
        payload: &B,
        token: &str,
    ) -> CarrierResult<Value> {
        let url = self.config.endpoint(path);
        let trans_id = Uuid::new_v4().to_string();
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header("transId", &trans_id)
            .header("transactionSrc", self.config.transaction_source())
            .json(payload)
            .send()
            .await
            .map_err(|error| self.classify_send_error(&error))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            response.json::<Value>().await.map_err(|error| {
                CarrierError::malformed_response(
                    CARRIER_ID,
                    format!("response body could not be decoded: {error}"),
                )
            })
        } else {
            let retry_after = retry_after_ms(response.headers());
            let body = response.text().await.unwrap_or_default();
            Err(classify_status(status, retry_after, &body))
        }
    }

    fn classify_send_error(&self, error: &reqwest::Error) -> CarrierError {
        let timeout_ms = self.config.timeout_ms();
        if error.is_timeout() {
            CarrierError::timeout_with_duration(
                CARRIER_ID,
                format!("request timed out after {timeout_ms}ms"),
                timeout_ms,
            )
        } else {
            CarrierError::network(CARRIER_ID, format!("request failed: {error}"))
        }
    }
}

fn is_auth_rejection(error: &CarrierError) -> bool {
    error.kind() == CarrierErrorKind::AuthFailure && error.status() == Some(401)
}

/// Classifies a non-success HTTP status, extracting the carrier's upstream
/// error detail from the body where the conventional shape is present.
fn classify_status(status: u16, retry_after: Option<u64>, body: &str) -> CarrierError {
    match status {
        429 => {
            let error = CarrierError::rate_limited(CARRIER_ID, "carrier throttled the request")
                .with_status(status);
            match retry_after {
                Some(ms) => error.with_retry_after(ms),
                None => error,
            }
        }
        401 => {
            let (code, message) = WireErrorResponse::first_error(body);
            CarrierError::auth_failure(CARRIER_ID, "bearer token rejected")
                .with_status(status)
                .with_upstream(code, message)
        }
        403 => {
            let (code, message) = WireErrorResponse::first_error(body);
            CarrierError::auth_failure(CARRIER_ID, "access forbidden")
                .with_status(status)
                .with_upstream(code, message)
        }
        400..=599 => {
            let (code, message) = WireErrorResponse::first_error(body);
            CarrierError::carrier_api(
                CARRIER_ID,
                format!("carrier API returned status {status}"),
                status,
            )
            .with_upstream(code, message)
        }
        _ => CarrierError::malformed_response(
            CARRIER_ID,
            format!("unexpected response status {status}"),
        )
        .with_status(status),
    }
}
