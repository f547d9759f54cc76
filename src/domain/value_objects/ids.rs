//! # Identifier Value Objects
//!
//! String-based identifiers with domain semantics.
//!
//! This module provides the [`CarrierId`] type identifying a shipping carrier
//! backend (e.g. `"ups"`). Identifiers are case-sensitive, compared verbatim,
//! and never interpreted by the core.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::value_objects::CarrierId;
//!
//! let id = CarrierId::new("ups");
//! assert_eq!(id.as_str(), "ups");
//! assert_eq!(id.to_string(), "ups");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a carrier backend.
///
/// Wraps a plain string so carrier identity cannot be confused with other
/// string-typed data such as service codes or account numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierId(String);

impl CarrierId {
    /// Creates a new carrier identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CarrierId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CarrierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
