//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the carrier-agnostic enumerations used throughout the
//! rate aggregation core:
//!
//! - [`ServiceLevel`] - Normalized delivery speed/guarantee categories
//! - [`DimensionUnit`] - Units for package dimensions
//! - [`WeightUnit`] - Units for package weight
//! - [`PackagingType`] - Packaging category tags
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits. None of them carry carrier-specific
//! codes; translation to wire vocabulary happens inside each carrier's mapper.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized service level, independent of any carrier's code table.
///
/// A service level describes delivery speed and guarantee in carrier-agnostic
/// terms. Each carrier mapper owns the translation between these levels and
/// its native service codes.
///
/// # Examples
///
/// ```
/// use rate_shop::domain::value_objects::enums::ServiceLevel;
///
/// let level = ServiceLevel::Ground;
/// assert!(!level.is_international());
/// assert_eq!(level.to_string(), "GROUND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ServiceLevel {
    /// Standard ground delivery.
    Ground = 0,
    /// Three business day delivery.
    ThreeDay = 1,
    /// Two business day delivery.
    TwoDay = 2,
    /// Two business day delivery, morning commitment.
    TwoDayAm = 3,
    /// Next business day delivery.
    Overnight = 4,
    /// Next business day delivery, later commitment.
    OvernightSaver = 5,
    /// Next business day delivery, early morning commitment.
    OvernightEarly = 6,
    /// International standard (day-definite ground where available).
    InternationalStandard = 7,
    /// International economy delivery.
    InternationalEconomy = 8,
    /// International priority delivery.
    InternationalPriority = 9,
    /// International express delivery.
    InternationalExpress = 10,
}

impl ServiceLevel {
    /// Returns true if this level describes an international service.
    #[inline]
    #[must_use]
    pub const fn is_international(self) -> bool {
        matches!(
            self,
            Self::InternationalStandard
                | Self::InternationalEconomy
                | Self::InternationalPriority
                | Self::InternationalExpress
        )
    }

    /// Returns true if this level carries a next-business-day commitment.
    #[inline]
    #[must_use]
    pub const fn is_overnight(self) -> bool {
        matches!(
            self,
            Self::Overnight | Self::OvernightSaver | Self::OvernightEarly
        )
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => write!(f, "GROUND"),
            Self::ThreeDay => write!(f, "THREE_DAY"),
            Self::TwoDay => write!(f, "TWO_DAY"),
            Self::TwoDayAm => write!(f, "TWO_DAY_AM"),
            Self::Overnight => write!(f, "OVERNIGHT"),
            Self::OvernightSaver => write!(f, "OVERNIGHT_SAVER"),
            Self::OvernightEarly => write!(f, "OVERNIGHT_EARLY"),
            Self::InternationalStandard => write!(f, "INTERNATIONAL_STANDARD"),
            Self::InternationalEconomy => write!(f, "INTERNATIONAL_ECONOMY"),
            Self::InternationalPriority => write!(f, "INTERNATIONAL_PRIORITY"),
            Self::InternationalExpress => write!(f, "INTERNATIONAL_EXPRESS"),
        }
    }
}

impl FromStr for ServiceLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GROUND" => Ok(Self::Ground),
            "THREE_DAY" => Ok(Self::ThreeDay),
            "TWO_DAY" => Ok(Self::TwoDay),
            "TWO_DAY_AM" => Ok(Self::TwoDayAm),
            "OVERNIGHT" => Ok(Self::Overnight),
            "OVERNIGHT_SAVER" => Ok(Self::OvernightSaver),
            "OVERNIGHT_EARLY" => Ok(Self::OvernightEarly),
            "INTERNATIONAL_STANDARD" => Ok(Self::InternationalStandard),
            "INTERNATIONAL_ECONOMY" => Ok(Self::InternationalEconomy),
            "INTERNATIONAL_PRIORITY" => Ok(Self::InternationalPriority),
            "INTERNATIONAL_EXPRESS" => Ok(Self::InternationalExpress),
            _ => Err(ParseEnumError::InvalidValue("ServiceLevel", s.to_string())),
        }
    }
}

/// Unit of measurement for package dimensions.
///
/// # Examples
///
/// ```
/// use rate_shop::domain::value_objects::enums::DimensionUnit;
///
/// assert_eq!(DimensionUnit::Inch.to_string(), "INCH");
/// assert!(!DimensionUnit::Centimeter.is_imperial());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum DimensionUnit {
    /// Imperial inches.
    Inch = 0,
    /// Metric centimeters.
    Centimeter = 1,
}

impl DimensionUnit {
    /// Returns true if this is an imperial unit.
    #[inline]
    #[must_use]
    pub const fn is_imperial(self) -> bool {
        matches!(self, Self::Inch)
    }
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inch => write!(f, "INCH"),
            Self::Centimeter => write!(f, "CENTIMETER"),
        }
    }
}

impl FromStr for DimensionUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCH" | "IN" => Ok(Self::Inch),
            "CENTIMETER" | "CM" => Ok(Self::Centimeter),
            _ => Err(ParseEnumError::InvalidValue("DimensionUnit", s.to_string())),
        }
    }
}

/// Unit of measurement for package weight.
///
/// # Examples
///
/// ```
/// use rate_shop::domain::value_objects::enums::WeightUnit;
///
/// assert_eq!(WeightUnit::Pound.to_string(), "POUND");
/// assert!(WeightUnit::Kilogram.is_metric());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum WeightUnit {
    /// Imperial pounds.
    Pound = 0,
    /// Metric kilograms.
    Kilogram = 1,
}

impl WeightUnit {
    /// Returns true if this is a metric unit.
    #[inline]
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Kilogram)
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pound => write!(f, "POUND"),
            Self::Kilogram => write!(f, "KILOGRAM"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "POUND" | "LB" | "LBS" => Ok(Self::Pound),
            "KILOGRAM" | "KG" | "KGS" => Ok(Self::Kilogram),
            _ => Err(ParseEnumError::InvalidValue("WeightUnit", s.to_string())),
        }
    }
}

/// Packaging category of a package.
///
/// Carriers price some service levels differently depending on packaging.
/// A package with no tag is treated as customer-supplied packaging by the
/// carrier mappers.
///
/// # Examples
///
/// ```
/// use rate_shop::domain::value_objects::enums::PackagingType;
///
/// assert_eq!(PackagingType::Letter.to_string(), "LETTER");
/// assert!(PackagingType::SmallBox.is_carrier_supplied());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PackagingType {
    /// Customer-supplied packaging.
    Custom = 0,
    /// Carrier letter envelope.
    Letter = 1,
    /// Carrier tube.
    Tube = 2,
    /// Carrier pak.
    Pak = 3,
    /// Small carrier box.
    SmallBox = 4,
    /// Medium carrier box.
    MediumBox = 5,
    /// Large carrier box.
    LargeBox = 6,
}

impl PackagingType {
    /// Returns true if the carrier supplies this packaging.
    #[inline]
    #[must_use]
    pub const fn is_carrier_supplied(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => write!(f, "CUSTOM"),
            Self::Letter => write!(f, "LETTER"),
            Self::Tube => write!(f, "TUBE"),
            Self::Pak => write!(f, "PAK"),
            Self::SmallBox => write!(f, "SMALL_BOX"),
            Self::MediumBox => write!(f, "MEDIUM_BOX"),
            Self::LargeBox => write!(f, "LARGE_BOX"),
        }
    }
}

impl FromStr for PackagingType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CUSTOM" => Ok(Self::Custom),
            "LETTER" => Ok(Self::Letter),
            "TUBE" => Ok(Self::Tube),
            "PAK" => Ok(Self::Pak),
            "SMALL_BOX" => Ok(Self::SmallBox),
            "MEDIUM_BOX" => Ok(Self::MediumBox),
            "LARGE_BOX" => Ok(Self::LargeBox),
            _ => Err(ParseEnumError::InvalidValue("PackagingType", s.to_string())),
        }
    }
}

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The value does not match any variant of the named enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
