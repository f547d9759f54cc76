//! # UPS Configuration
//!
//! Explicit configuration for the UPS backend.
//!
//! Configuration is an owned struct constructed once at startup and passed
//! into the backend's constructors; the core never reads the process
//! environment itself. [`UpsConfig::from_env`] is the one place environment
//! variables (prefix `UPS_`) are turned into a config value, and it fails
//! fast on missing or malformed required values.
//!
//! # Examples
//!
//! ```
//! use rate_shop::infrastructure::carriers::ups::UpsConfig;
//!
//! let config = UpsConfig::new("client-id", "client-secret", "A1B2C3");
//! assert_eq!(config.base_url(), "https://onlinetools.ups.com");
//! assert_eq!(config.timeout_ms(), 10_000);
//! ```

use crate::domain::errors::{CarrierError, CarrierResult};
use config::{Config, Environment};
use serde::Deserialize;

fn default_base_url() -> String {
    UpsConfig::DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    UpsConfig::DEFAULT_API_VERSION.to_string()
}

fn default_timeout_ms() -> u64 {
    UpsConfig::DEFAULT_TIMEOUT_MS
}

fn default_transaction_source() -> String {
    UpsConfig::DEFAULT_TRANSACTION_SOURCE.to_string()
}

/// Configuration for the UPS carrier backend.
///
/// Required: OAuth client id/secret and the shipper account number.
/// Base URL, API version, timeout, and transaction source carry explicit
/// defaults and may be overridden.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsConfig {
    /// OAuth client identifier.
    client_id: String,
    /// OAuth client secret.
    client_secret: String,
    /// Shipper account number used for negotiated rates.
    account_number: String,
    /// API base URL.
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Rating API version segment.
    #[serde(default = "default_api_version")]
    api_version: String,
    /// HTTP timeout in milliseconds, applied to every call.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
    /// Value of the `transactionSrc` correlation header.
    #[serde(default = "default_transaction_source")]
    transaction_source: String,
}

impl UpsConfig {
    /// Production API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://onlinetools.ups.com";
    /// Rating API version used when none is configured.
    pub const DEFAULT_API_VERSION: &'static str = "v2409";
    /// HTTP timeout used when none is configured.
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
    /// Transaction source reported to the carrier.
    pub const DEFAULT_TRANSACTION_SOURCE: &'static str = "rate-shop";

    /// Creates a configuration with the required credentials and default
    /// base URL, version, timeout, and transaction source.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            account_number: account_number.into(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
            transaction_source: default_transaction_source(),
        }
    }

    /// Loads configuration from `UPS_`-prefixed environment variables.
    ///
    /// Required: `UPS_CLIENT_ID`, `UPS_CLIENT_SECRET`, `UPS_ACCOUNT_NUMBER`.
    /// Optional: `UPS_BASE_URL`, `UPS_API_VERSION`, `UPS_TIMEOUT_MS`,
    /// `UPS_TRANSACTION_SOURCE`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a required variable is absent or
    /// a value cannot be parsed.
    pub fn from_env() -> CarrierResult<Self> {
        let source = Config::builder()
            .add_source(Environment::with_prefix("UPS").try_parsing(true))
            .build()
            .map_err(|e| CarrierError::configuration(format!("failed to read environment: {e}")))?;
        let config: Self = source
            .try_deserialize()
            .map_err(|e| CarrierError::configuration(format!("invalid UPS configuration: {e}")))?;
        config.validate()?;

        Ok(config)
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the rating API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Overrides the HTTP timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Overrides the transaction source header value.
    #[must_use]
    pub fn with_transaction_source(mut self, transaction_source: impl Into<String>) -> Self {
        self.transaction_source = transaction_source.into();
        self
    }

    /// Checks that required values are present and usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> CarrierResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(CarrierError::configuration("UPS client id is required"));
        }
        if self.client_secret.trim().is_empty() {
            return Err(CarrierError::configuration("UPS client secret is required"));
        }
        if self.account_number.trim().is_empty() {
            return Err(CarrierError::configuration(
                "UPS account number is required",
            ));
        }
        if !self.base_url.starts_with("http") {
            return Err(CarrierError::configuration(format!(
                "UPS base URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(CarrierError::configuration(
                "UPS timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Returns the OAuth client identifier.
    #[inline]
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[inline]
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the shipper account number.
    #[inline]
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Returns the API base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the rating API version segment.
    #[inline]
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the HTTP timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the `transactionSrc` header value.
    #[inline]
    #[must_use]
    pub fn transaction_source(&self) -> &str {
        &self.transaction_source
    }

    /// Builds a full URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::CarrierErrorKind;

    #[test]
    fn new_applies_defaults() {
        let config = UpsConfig::new("id", "secret", "A1B2C3");
        assert_eq!(config.base_url(), UpsConfig::DEFAULT_BASE_URL);
        assert_eq!(config.api_version(), "v2409");
        assert_eq!(config.timeout_ms(), 10_000);
        assert_eq!(config.transaction_source(), "rate-shop");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides() {
        let config = UpsConfig::new("id", "secret", "A1B2C3")
            .with_base_url("https://wwwcie.ups.com")
            .with_api_version("v1")
            .with_timeout_ms(2_000)
            .with_transaction_source("testing");

        assert_eq!(config.base_url(), "https://wwwcie.ups.com");
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.timeout_ms(), 2_000);
        assert_eq!(config.transaction_source(), "testing");
    }

    #[test]
    fn missing_client_id_rejected() {
        let config = UpsConfig::new("", "secret", "A1B2C3");
        let error = config.validate().unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::Configuration);
        assert!(error.message().contains("client id"));
    }

    #[test]
    fn bad_base_url_rejected() {
        let config = UpsConfig::new("id", "secret", "A1B2C3").with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = UpsConfig::new("id", "secret", "A1B2C3").with_timeout_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = UpsConfig::new("id", "secret", "A1B2C3").with_base_url("https://example.com/");
        assert_eq!(
            config.endpoint("/security/v1/oauth/token"),
            "https://example.com/security/v1/oauth/token"
        );
    }
}
