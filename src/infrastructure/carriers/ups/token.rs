//! # UPS Token Manager
//!
//! OAuth client-credentials lifecycle for one carrier account.
//!
//! The manager owns a single cached bearer token and a single-flight slot
//! for the in-flight acquisition. Callers that arrive while an acquisition
//! is pending await the *same* shared future, so at most one
//! credential-exchange request is issued per expiry cycle regardless of
//! concurrent demand. A failed acquisition is delivered to every awaiter
//! and never cached; the next call starts fresh.
//!
//! Tokens are replaced wholesale on refresh and treated as expired once
//! they come within [`TokenManager::EXPIRY_BUFFER_SECS`] of their expiry
//! instant.

use crate::domain::errors::{CarrierError, CarrierResult};
use crate::domain::value_objects::Timestamp;
use crate::infrastructure::carriers::ups::config::UpsConfig;
use crate::infrastructure::carriers::ups::transport::retry_after_ms;
use crate::infrastructure::carriers::ups::wire::WireTokenResponse;
use crate::infrastructure::carriers::ups::CARRIER_ID;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;

/// A bearer credential for the carrier API.
///
/// Exactly one token is live at a time per [`TokenManager`]; tokens are
/// replaced wholesale on refresh and never mutated in place.
#[derive(Debug, Clone)]
pub struct Token {
    access_token: String,
    token_type: String,
    expires_at: Timestamp,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: Timestamp,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_at,
        }
    }

    /// Returns the opaque access-token string.
    #[inline]
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the token type reported by the carrier.
    #[inline]
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the expiry instant.
    #[inline]
    #[must_use]
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Returns true if the token is more than `buffer_secs` away from
    /// expiry.
    #[must_use]
    pub fn is_fresh(&self, buffer_secs: i64) -> bool {
        self.expires_at.sub_secs(buffer_secs).is_after(&Timestamp::now())
    }
}

type SharedAcquire = Shared<BoxFuture<'static, CarrierResult<Token>>>;

#[derive(Default)]
struct TokenState {
    current: Option<Token>,
    in_flight: Option<SharedAcquire>,
}

/// Acquires, caches, and refreshes the bearer credential for one carrier
/// account.
///
/// Safe to share across concurrent tasks behind `&self`; the only mutable
/// state is the token cell, guarded by a mutex that is never held across an
/// await point.
pub struct TokenManager {
    http: Client,
    config: Arc<UpsConfig>,
    state: Mutex<TokenState>,
}

impl TokenManager {
    /// Safety buffer before expiry within which a token is refreshed.
    pub const EXPIRY_BUFFER_SECS: i64 = 60;

    /// Creates a manager for the given account.
    #[must_use]
    pub fn new(http: Client, config: Arc<UpsConfig>) -> Self {
        Self {
            http,
            config,
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Returns a valid access-token string, acquiring or refreshing as
    /// needed.
    ///
    /// A cached token outside the expiry buffer is returned without I/O.
    /// Otherwise the caller either joins the in-flight acquisition or
    /// starts one; every concurrent caller observes the same outcome.
    ///
    /// # Errors
    ///
    /// Propagates the classified acquisition failure (auth, network,
    /// timeout, or rate-limited) to every awaiter of the shared attempt.
    pub async fn access_token(&self) -> CarrierResult<String> {
        let acquisition = {
            let mut state = self.state.lock();
            if let Some(token) = state.current.as_ref() {
                if token.is_fresh(Self::EXPIRY_BUFFER_SECS) {
                    return Ok(token.access_token().to_string());
                }
            }
            match state.in_flight.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    tracing::debug!(carrier = CARRIER_ID, "acquiring access token");
                    let pending = Self::acquire(self.http.clone(), Arc::clone(&self.config))
                        .boxed()
                        .shared();
                    state.in_flight = Some(pending.clone());
                    pending
                }
            }
        };

        let result = acquisition.clone().await;

        // Clear the slot before handing the outcome to the caller so a
        // subsequent call after failure retries fresh. Pointer-compared so
        // a newer acquisition started in the meantime is never clobbered.
        let mut state = self.state.lock();
        if state
            .in_flight
            .as_ref()
            .is_some_and(|pending| Shared::ptr_eq(pending, &acquisition))
        {
            state.in_flight = None;
        }
        match result {
            Ok(token) => {
                state.current = Some(token.clone());
                Ok(token.access_token)
            }
            Err(error) => Err(error),
        }
    }

    /// Clears the cached token so the next call re-acquires.
    ///
    /// Idempotent and performs no I/O. Called by the transport after the
    /// carrier rejects a bearer token.
    pub fn invalidate(&self) {
        self.state.lock().current = None;
    }

    /// Returns true if a cached token exists and is outside the expiry
    /// buffer. Pure predicate over current state; no I/O.
    #[must_use]
    pub fn has_valid_token(&self) -> bool {
        self.state
            .lock()
            .current
            .as_ref()
            .is_some_and(|token| token.is_fresh(Self::EXPIRY_BUFFER_SECS))
    }

    async fn acquire(http: Client, config: Arc<UpsConfig>) -> CarrierResult<Token> {
        let url = config.endpoint("/security/v1/oauth/token");
        let response = http
            .post(&url)
            .basic_auth(config.client_id(), Some(config.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|error| classify_send_error(&error, config.timeout_ms()))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = retry_after_ms(response.headers());
            return Err(classify_exchange_status(status.as_u16(), retry_after));
        }

        let body: WireTokenResponse = response.json().await.map_err(|error| {
            CarrierError::auth_failure(
                CARRIER_ID,
                format!("token response could not be decoded: {error}"),
            )
        })?;
        let access_token = body.access_token.ok_or_else(|| {
            CarrierError::auth_failure(CARRIER_ID, "token response is missing access_token")
        })?;
        let expires_in = body.expires_in.ok_or_else(|| {
            CarrierError::auth_failure(CARRIER_ID, "token response is missing expires_in")
        })?;
        let token_type = body.token_type.unwrap_or_else(|| "Bearer".to_string());
        let expires_at = Timestamp::now().add_secs(expires_in as i64);

        tracing::debug!(
            carrier = CARRIER_ID,
            expires_in_secs = expires_in,
            "access token acquired"
        );

        Ok(Token::new(access_token, token_type, expires_at))
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("has_valid_token", &self.has_valid_token())
            .finish()
    }
}

fn classify_send_error(error: &reqwest::Error, timeout_ms: u64) -> CarrierError {
    if error.is_timeout() {
        CarrierError::timeout_with_duration(
            CARRIER_ID,
            format!("token request timed out after {timeout_ms}ms"),
            timeout_ms,
        )
    } else {
        CarrierError::network(CARRIER_ID, format!("token request failed: {error}"))
    }
}

fn classify_exchange_status(status: u16, retry_after: Option<u64>) -> CarrierError {
    match status {
        401 | 403 => CarrierError::auth_failure(
            CARRIER_ID,
            "credential exchange rejected by the carrier",
        )
        .with_status(status),
        429 => {
            let error = CarrierError::rate_limited(CARRIER_ID, "credential exchange throttled")
                .with_status(status);
            match retry_after {
                Some(ms) => error.with_retry_after(ms),
                None => error,
            }
        }
        _ => CarrierError::auth_failure(
            CARRIER_ID,
            format!("credential exchange returned status {status}"),
        )
        .with_status(status),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::CarrierErrorKind;

    fn manager() -> TokenManager {
        let config = Arc::new(UpsConfig::new("id", "secret", "A1B2C3"));
        TokenManager::new(Client::new(), config)
    }

    mod token {
        use super::*;

        #[test]
        fn fresh_outside_buffer() {
            let token = Token::new("abc", "Bearer", Timestamp::now().add_secs(3600));
            assert!(token.is_fresh(60));
        }

        #[test]
        fn stale_within_buffer() {
            let token = Token::new("abc", "Bearer", Timestamp::now().add_secs(30));
            assert!(!token.is_fresh(60));
        }

        #[test]
        fn stale_after_expiry() {
            let token = Token::new("abc", "Bearer", Timestamp::now().sub_secs(10));
            assert!(!token.is_fresh(60));
        }
    }

    mod state {
        use super::*;

        #[test]
        fn starts_without_valid_token() {
            assert!(!manager().has_valid_token());
        }

        #[test]
        fn invalidate_is_idempotent() {
            let manager = manager();
            manager.invalidate();
            manager.invalidate();
            assert!(!manager.has_valid_token());
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn unauthorized_is_auth_failure() {
            let error = classify_exchange_status(401, None);
            assert_eq!(error.kind(), CarrierErrorKind::AuthFailure);
            assert_eq!(error.status(), Some(401));
            assert!(!error.is_retryable());
        }

        #[test]
        fn throttled_is_rate_limited_with_hint() {
            let error = classify_exchange_status(429, Some(30_000));
            assert_eq!(error.kind(), CarrierErrorKind::RateLimited);
            assert_eq!(error.retry_after_ms(), Some(30_000));
            assert!(error.is_retryable());
        }

        #[test]
        fn unexpected_status_is_auth_failure_with_status() {
            let error = classify_exchange_status(500, None);
            assert_eq!(error.kind(), CarrierErrorKind::AuthFailure);
            assert_eq!(error.status(), Some(500));
        }
    }
}
