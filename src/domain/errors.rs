//! # Carrier Errors
//!
//! The single failure taxonomy for the rate aggregation core.
//!
//! Every failure path in the core produces exactly one [`CarrierError`]; raw
//! transport errors never cross the core boundary. An error is a kind tag
//! ([`CarrierErrorKind`]) plus uniform metadata: human message, originating
//! carrier, upstream HTTP status, carrier-native error code/message, an
//! optional retry-after hint, and a creation timestamp. Retryability is fixed
//! by kind and never stored.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::errors::CarrierError;
//!
//! let error = CarrierError::timeout("ups", "request timed out");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::auth_failure("ups", "invalid credentials");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::value_objects::{CarrierId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for all carrier-facing operations.
pub type CarrierResult<T> = Result<T, CarrierError>;

/// Kind tag of a [`CarrierError`].
///
/// The set is exhaustive; callers can match on it to decide whether to
/// retry, alert, or degrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarrierErrorKind {
    /// Request failed domain-schema validation before dispatch.
    Validation,
    /// Local configuration is missing or malformed.
    Configuration,
    /// Carrier rejected the credentials or the bearer token.
    AuthFailure,
    /// No response was received from the carrier.
    Network,
    /// The call exceeded the configured timeout.
    Timeout,
    /// Carrier throttled the caller.
    RateLimited,
    /// Carrier returned an API-level error response.
    CarrierApi,
    /// The carrier is not registered or not reachable.
    CarrierUnavailable,
    /// Carrier returned a body the core could not interpret.
    MalformedResponse,
    /// Unclassified failure.
    Unknown,
}

impl fmt::Display for CarrierErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation error"),
            Self::Configuration => write!(f, "configuration error"),
            Self::AuthFailure => write!(f, "authentication failure"),
            Self::Network => write!(f, "network error"),
            Self::Timeout => write!(f, "timeout"),
            Self::RateLimited => write!(f, "rate limited"),
            Self::CarrierApi => write!(f, "carrier API error"),
            Self::CarrierUnavailable => write!(f, "carrier unavailable"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

/// Structured error for carrier operations.
///
/// Constructed through the kind-specific helpers below; the `with_*` methods
/// attach optional metadata. The error is `Clone` so a single failed token
/// acquisition can be delivered to every concurrent awaiter.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct CarrierError {
    kind: CarrierErrorKind,
    message: String,
    carrier: Option<CarrierId>,
    status: Option<u16>,
    upstream_code: Option<String>,
    upstream_message: Option<String>,
    retry_after_ms: Option<u64>,
    timeout_ms: Option<u64>,
    occurred_at: Timestamp,
}

impl CarrierError {
    fn new(kind: CarrierErrorKind, carrier: Option<CarrierId>, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            carrier,
            status: None,
            upstream_code: None,
            upstream_message: None,
            retry_after_ms: None,
            timeout_ms: None,
            occurred_at: Timestamp::now(),
        }
    }

    /// Creates a validation error. Raised before any carrier is contacted,
    /// so it carries no carrier id.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::Validation, None, message)
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::Configuration, None, message)
    }

    /// Creates an authentication failure.
    #[must_use]
    pub fn auth_failure(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::AuthFailure, Some(carrier.into()), message)
    }

    /// Creates a network error (no response received).
    #[must_use]
    pub fn network(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::Network, Some(carrier.into()), message)
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::Timeout, Some(carrier.into()), message)
    }

    /// Creates a timeout error carrying the configured timeout duration.
    #[must_use]
    pub fn timeout_with_duration(
        carrier: impl Into<CarrierId>,
        message: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        let mut error = Self::timeout(carrier, message);
        error.timeout_ms = Some(timeout_ms);
        error
    }

    /// Creates a rate-limited error.
    #[must_use]
    pub fn rate_limited(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::RateLimited, Some(carrier.into()), message)
    }

    /// Creates a carrier API error for the given upstream status.
    #[must_use]
    pub fn carrier_api(
        carrier: impl Into<CarrierId>,
        message: impl Into<String>,
        status: u16,
    ) -> Self {
        let mut error = Self::new(CarrierErrorKind::CarrierApi, Some(carrier.into()), message);
        error.status = Some(status);
        error
    }

    /// Creates a carrier-unavailable error.
    #[must_use]
    pub fn carrier_unavailable(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(
            CarrierErrorKind::CarrierUnavailable,
            Some(carrier.into()),
            message,
        )
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed_response(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(
            CarrierErrorKind::MalformedResponse,
            Some(carrier.into()),
            message,
        )
    }

    /// Creates an unclassified error.
    #[must_use]
    pub fn unknown(carrier: impl Into<CarrierId>, message: impl Into<String>) -> Self {
        Self::new(CarrierErrorKind::Unknown, Some(carrier.into()), message)
    }

    /// Attaches the upstream HTTP status.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the carrier-native error code and message.
    #[must_use]
    pub fn with_upstream(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.upstream_code = Some(code.into());
        self.upstream_message = Some(message.into());
        self
    }

    /// Attaches a retry-after hint in milliseconds.
    #[must_use]
    pub fn with_retry_after(mut self, retry_after_ms: u64) -> Self {
        self.retry_after_ms = Some(retry_after_ms);
        self
    }

    /// Returns the kind tag.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CarrierErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the originating carrier, if the failure occurred after
    /// carrier resolution.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> Option<&CarrierId> {
        self.carrier.as_ref()
    }

    /// Returns the upstream HTTP status, if any.
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the carrier-native error code, if any.
    #[inline]
    #[must_use]
    pub fn upstream_code(&self) -> Option<&str> {
        self.upstream_code.as_deref()
    }

    /// Returns the carrier-native error message, if any.
    #[inline]
    #[must_use]
    pub fn upstream_message(&self) -> Option<&str> {
        self.upstream_message.as_deref()
    }

    /// Returns the retry-after hint in milliseconds, if any.
    #[inline]
    #[must_use]
    pub fn retry_after_ms(&self) -> Option<u64> {
        self.retry_after_ms
    }

    /// Returns the configured timeout in milliseconds, for timeout errors.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    /// Returns when this error was created.
    #[inline]
    #[must_use]
    pub fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    /// Returns true if retrying the operation may succeed.
    ///
    /// Retryability is fixed by kind: network, timeout, and rate-limited
    /// failures are transient; carrier API errors are retryable only when
    /// the upstream status is a server error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            CarrierErrorKind::Network
            | CarrierErrorKind::Timeout
            | CarrierErrorKind::RateLimited => true,
            CarrierErrorKind::CarrierApi => self.status.is_some_and(|status| status >= 500),
            CarrierErrorKind::Validation
            | CarrierErrorKind::Configuration
            | CarrierErrorKind::AuthFailure
            | CarrierErrorKind::CarrierUnavailable
            | CarrierErrorKind::MalformedResponse
            | CarrierErrorKind::Unknown => false,
        }
    }
}
