//! # Package Value
//!
//! Physical package description for rating.
//!
//! This module provides [`Package`] together with its measured parts,
//! [`Dimensions`] and [`Weight`]. All measurements are `Decimal` values so
//! carrier mappers can emit them verbatim as stringified numbers.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::entities::package::{Dimensions, Package, Weight};
//! use rate_shop::domain::value_objects::{DimensionUnit, WeightUnit};
//! use rust_decimal::Decimal;
//!
//! let package = Package::new(
//!     Dimensions::new(Decimal::from(12), Decimal::from(8), Decimal::from(4), DimensionUnit::Inch),
//!     Weight::new(Decimal::from(5), WeightUnit::Pound),
//! );
//! assert!(package.packaging_type().is_none());
//! ```

use crate::domain::value_objects::{DimensionUnit, Money, PackagingType, WeightUnit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Package dimensions with their unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in the given unit.
    length: Decimal,
    /// Width in the given unit.
    width: Decimal,
    /// Height in the given unit.
    height: Decimal,
    /// Unit of measurement.
    unit: DimensionUnit,
}

impl Dimensions {
    /// Creates new dimensions.
    #[must_use]
    pub fn new(length: Decimal, width: Decimal, height: Decimal, unit: DimensionUnit) -> Self {
        Self {
            length,
            width,
            height,
            unit,
        }
    }

    /// Returns the length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Decimal {
        self.length
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Returns the unit of measurement.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> DimensionUnit {
        self.unit
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} {}",
            self.length, self.width, self.height, self.unit
        )
    }
}

/// Package weight with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// Weight value in the given unit.
    value: Decimal,
    /// Unit of measurement.
    unit: WeightUnit,
}

impl Weight {
    /// Creates a new weight.
    #[must_use]
    pub fn new(value: Decimal, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Returns the weight value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the unit of measurement.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A physical package to be rated.
///
/// Immutable after construction. A package with no packaging tag is rated as
/// customer-supplied packaging; a declared value, when present, is passed to
/// the carrier as insured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Outer dimensions.
    dimensions: Dimensions,
    /// Actual weight.
    weight: Weight,
    /// Optional packaging category tag.
    packaging_type: Option<PackagingType>,
    /// Optional declared (insured) value.
    declared_value: Option<Money>,
}

impl Package {
    /// Creates a new package with no packaging tag and no declared value.
    #[must_use]
    pub fn new(dimensions: Dimensions, weight: Weight) -> Self {
        Self {
            dimensions,
            weight,
            packaging_type: None,
            declared_value: None,
        }
    }

    /// Sets the packaging category tag.
    #[must_use]
    pub fn with_packaging_type(mut self, packaging_type: PackagingType) -> Self {
        self.packaging_type = Some(packaging_type);
        self
    }

    /// Sets the declared (insured) value.
    #[must_use]
    pub fn with_declared_value(mut self, declared_value: Money) -> Self {
        self.declared_value = Some(declared_value);
        self
    }

    /// Returns the dimensions.
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Returns the packaging category tag, if set.
    #[inline]
    #[must_use]
    pub fn packaging_type(&self) -> Option<PackagingType> {
        self.packaging_type
    }

    /// Returns the declared value, if set.
    #[inline]
    #[must_use]
    pub fn declared_value(&self) -> Option<&Money> {
        self.declared_value.as_ref()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Package({}, {})", self.dimensions, self.weight)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_package() -> Package {
        Package::new(
            Dimensions::new(
                Decimal::from(12),
                Decimal::from(8),
                Decimal::from(4),
                DimensionUnit::Inch,
            ),
            Weight::new(Decimal::from(5), WeightUnit::Pound),
        )
    }

    #[test]
    fn new_has_no_options() {
        let package = test_package();
        assert!(package.packaging_type().is_none());
        assert!(package.declared_value().is_none());
    }

    #[test]
    fn with_packaging_type() {
        let package = test_package().with_packaging_type(PackagingType::MediumBox);
        assert_eq!(package.packaging_type(), Some(PackagingType::MediumBox));
    }

    #[test]
    fn with_declared_value() {
        let package = test_package().with_declared_value(Money::new(Decimal::from(250), "USD"));
        let value = package.declared_value().unwrap();
        assert_eq!(value.currency(), "USD");
    }

    #[test]
    fn display() {
        let display = test_package().to_string();
        assert!(display.contains("12x8x4"));
        assert!(display.contains("POUND"));
    }
}
