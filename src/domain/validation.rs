//! # Request Validation
//!
//! Domain-schema validation for rate requests.
//!
//! The rate-shopping service calls [`validate`] before any carrier is
//! contacted; a failing request is rejected with a validation error and
//! never reaches the network. Validation lives here rather than in the
//! entity constructors so requests can be assembled freely and checked once.
//!
//! # Examples
//!
//! ```
//! use rate_shop::domain::entities::address::Address;
//! use rate_shop::domain::entities::rate_request::RateRequest;
//! use rate_shop::domain::validation::validate;
//!
//! let origin = Address::new("Shipper", vec!["1 Dock St".to_string()], "Louisville", "KY", "40201", "US");
//! let destination = Address::new("Recipient", vec!["9 Elm St".to_string()], "Portland", "OR", "97201", "US");
//!
//! // A request with zero packages is rejected.
//! let request = RateRequest::builder(origin, destination).build();
//! assert!(validate(&request).is_err());
//! ```

use crate::domain::entities::address::Address;
use crate::domain::entities::package::Package;
use crate::domain::entities::rate_request::RateRequest;
use crate::domain::errors::{CarrierError, CarrierResult};
use rust_decimal::Decimal;

/// Maximum number of packages per rate request.
pub const MAX_PACKAGES: usize = 50;

/// Validates a rate request against the domain schema.
///
/// # Errors
///
/// Returns a validation-kind [`CarrierError`] describing the first problem
/// found. The check is side-effect free and performs no I/O.
pub fn validate(request: &RateRequest) -> CarrierResult<()> {
    validate_address(request.origin(), "origin")?;
    validate_address(request.destination(), "destination")?;

    if request.packages().is_empty() {
        return Err(CarrierError::validation(
            "at least one package is required",
        ));
    }
    if request.packages().len() > MAX_PACKAGES {
        return Err(CarrierError::validation(format!(
            "at most {} packages are allowed, got {}",
            MAX_PACKAGES,
            request.packages().len()
        )));
    }
    for (index, package) in request.packages().iter().enumerate() {
        validate_package(package, index)?;
    }

    if let Some(carriers) = request.carriers() {
        if carriers.is_empty() {
            return Err(CarrierError::validation(
                "carrier restriction must name at least one carrier",
            ));
        }
    }

    Ok(())
}

fn validate_address(address: &Address, role: &str) -> CarrierResult<()> {
    if address.name().trim().is_empty() {
        return Err(CarrierError::validation(format!(
            "{role} address: name is required"
        )));
    }
    if address.street_lines().is_empty() || address.street_lines().len() > 3 {
        return Err(CarrierError::validation(format!(
            "{role} address: between 1 and 3 street lines are required"
        )));
    }
    if address.street_lines().iter().any(|line| line.trim().is_empty()) {
        return Err(CarrierError::validation(format!(
            "{role} address: street lines must not be blank"
        )));
    }
    if address.city().trim().is_empty() {
        return Err(CarrierError::validation(format!(
            "{role} address: city is required"
        )));
    }
    if address.postal_code().trim().is_empty() {
        return Err(CarrierError::validation(format!(
            "{role} address: postal code is required"
        )));
    }
    if !is_alpha2_country(address.country()) {
        return Err(CarrierError::validation(format!(
            "{role} address: country must be an ISO-3166-1 alpha-2 code, got '{}'",
            address.country()
        )));
    }

    Ok(())
}

fn validate_package(package: &Package, index: usize) -> CarrierResult<()> {
    let dimensions = package.dimensions();
    if dimensions.length() <= Decimal::ZERO
        || dimensions.width() <= Decimal::ZERO
        || dimensions.height() <= Decimal::ZERO
    {
        return Err(CarrierError::validation(format!(
            "package {index}: dimensions must be positive"
        )));
    }
    if package.weight().value() <= Decimal::ZERO {
        return Err(CarrierError::validation(format!(
            "package {index}: weight must be positive"
        )));
    }
    if let Some(declared) = package.declared_value() {
        if !declared.is_positive() {
            return Err(CarrierError::validation(format!(
                "package {index}: declared value must be positive"
            )));
        }
        if !is_currency_code(declared.currency()) {
            return Err(CarrierError::validation(format!(
                "package {index}: declared value currency must be a 3-letter code, got '{}'",
                declared.currency()
            )));
        }
    }

    Ok(())
}

fn is_alpha2_country(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase())
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::package::{Dimensions, Weight};
    use crate::domain::errors::CarrierErrorKind;
    use crate::domain::value_objects::{DimensionUnit, Money, WeightUnit};

    fn test_address(country: &str) -> Address {
        Address::new(
            "Test",
            vec!["1 Main St".to_string()],
            "Louisville",
            "KY",
            "40201",
            country,
        )
    }

    fn test_package() -> Package {
        Package::new(
            Dimensions::new(
                Decimal::from(10),
                Decimal::from(6),
                Decimal::from(4),
                DimensionUnit::Inch,
            ),
            Weight::new(Decimal::from(2), WeightUnit::Pound),
        )
    }

    fn valid_request() -> RateRequest {
        RateRequest::builder(test_address("US"), test_address("US"))
            .package(test_package())
            .build()
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn zero_packages_rejected() {
        let request = RateRequest::builder(test_address("US"), test_address("US")).build();
        let error = validate(&request).unwrap_err();
        assert_eq!(error.kind(), CarrierErrorKind::Validation);
        assert!(error.message().contains("at least one package"));
    }

    #[test]
    fn too_many_packages_rejected() {
        let request = RateRequest::builder(test_address("US"), test_address("US"))
            .packages(std::iter::repeat_with(test_package).take(MAX_PACKAGES + 1))
            .build();
        let error = validate(&request).unwrap_err();
        assert!(error.message().contains("at most 50"));
    }

    #[test]
    fn bad_country_rejected() {
        let request = RateRequest::builder(test_address("USA"), test_address("US"))
            .package(test_package())
            .build();
        let error = validate(&request).unwrap_err();
        assert!(error.message().contains("origin"));
        assert!(error.message().contains("'USA'"));
    }

    #[test]
    fn blank_street_line_rejected() {
        let address = Address::new(
            "Test",
            vec!["  ".to_string()],
            "Louisville",
            "KY",
            "40201",
            "US",
        );
        let request = RateRequest::builder(address, test_address("US"))
            .package(test_package())
            .build();
        assert!(validate(&request).is_err());
    }

    #[test]
    fn non_positive_weight_rejected() {
        let package = Package::new(
            Dimensions::new(
                Decimal::from(10),
                Decimal::from(6),
                Decimal::from(4),
                DimensionUnit::Inch,
            ),
            Weight::new(Decimal::ZERO, WeightUnit::Pound),
        );
        let request = RateRequest::builder(test_address("US"), test_address("US"))
            .package(package)
            .build();
        let error = validate(&request).unwrap_err();
        assert!(error.message().contains("weight"));
    }

    #[test]
    fn zero_declared_value_rejected() {
        let package = test_package().with_declared_value(Money::zero("USD"));
        let request = RateRequest::builder(test_address("US"), test_address("US"))
            .package(package)
            .build();
        let error = validate(&request).unwrap_err();
        assert!(error.message().contains("declared value"));
    }

    #[test]
    fn empty_carrier_restriction_rejected() {
        let request = RateRequest::builder(test_address("US"), test_address("US"))
            .package(test_package())
            .carriers(Vec::new())
            .build();
        let error = validate(&request).unwrap_err();
        assert!(error.message().contains("carrier restriction"));
    }
}
