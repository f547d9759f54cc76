//! # UPS Mapper
//!
//! Pure, side-effect-free translation between the domain model and the UPS
//! wire format.
//!
//! Two lookup tables anchor the translation and are kept mutually
//! consistent: service code <-> normalized [`ServiceLevel`], and service
//! code -> display name. The level-to-code direction is total over the
//! closed `ServiceLevel` enum; the code-to-level direction additionally
//! accepts alias codes (e.g. Worldwide Express Plus) that normalize to the
//! same level as their canonical sibling.

use crate::domain::entities::address::Address;
use crate::domain::entities::package::{Package, Weight};
use crate::domain::entities::rate_quote::{RateQuote, Surcharge};
use crate::domain::entities::rate_request::RateRequest;
use crate::domain::errors::{CarrierError, CarrierResult};
use crate::domain::value_objects::{
    CarrierId, DimensionUnit, Money, PackagingType, ServiceLevel, WeightUnit,
};
use crate::infrastructure::carriers::ups::wire::{
    WireAddress, WireCodeDescription, WireDimensions, WireMonetary, WirePackage,
    WirePackageServiceOptions, WirePackageWeight, WireParty, WireRateRequest, WireRateRequestBody,
    WireRatedShipment, WireRequestSection, WireShipment, WireShipper,
};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Request option for a single-service rating call.
pub(crate) const REQUEST_OPTION_RATE: &str = "Rate";
/// Request option for a shop-all-services rating call.
pub(crate) const REQUEST_OPTION_SHOP: &str = "Shop";

/// Returns the canonical UPS service code for a normalized level.
pub(crate) fn service_code(level: ServiceLevel) -> &'static str {
    match level {
        ServiceLevel::Ground => "03",
        ServiceLevel::ThreeDay => "12",
        ServiceLevel::TwoDay => "02",
        ServiceLevel::TwoDayAm => "59",
        ServiceLevel::Overnight => "01",
        ServiceLevel::OvernightSaver => "13",
        ServiceLevel::OvernightEarly => "14",
        ServiceLevel::InternationalStandard => "11",
        ServiceLevel::InternationalEconomy => "08",
        ServiceLevel::InternationalPriority => "07",
        ServiceLevel::InternationalExpress => "65",
    }
}

/// Returns the normalized level for a UPS service code.
///
/// Accepts the canonical codes plus aliases; `"54"` (Worldwide Express
/// Plus) normalizes to the same level as `"07"` but is never emitted in the
/// level-to-code direction.
pub(crate) fn service_level_for_code(code: &str) -> Option<ServiceLevel> {
    match code {
        "03" => Some(ServiceLevel::Ground),
        "12" => Some(ServiceLevel::ThreeDay),
        "02" => Some(ServiceLevel::TwoDay),
        "59" => Some(ServiceLevel::TwoDayAm),
        "01" => Some(ServiceLevel::Overnight),
        "13" => Some(ServiceLevel::OvernightSaver),
        "14" => Some(ServiceLevel::OvernightEarly),
        "11" => Some(ServiceLevel::InternationalStandard),
        "08" => Some(ServiceLevel::InternationalEconomy),
        "07" | "54" => Some(ServiceLevel::InternationalPriority),
        "65" => Some(ServiceLevel::InternationalExpress),
        _ => None,
    }
}

/// Returns the display name for a UPS service code.
pub(crate) fn service_display_name(code: &str) -> Option<&'static str> {
    match code {
        "01" => Some("UPS Next Day Air"),
        "02" => Some("UPS 2nd Day Air"),
        "03" => Some("UPS Ground"),
        "07" => Some("UPS Worldwide Express"),
        "08" => Some("UPS Worldwide Expedited"),
        "11" => Some("UPS Standard"),
        "12" => Some("UPS 3 Day Select"),
        "13" => Some("UPS Next Day Air Saver"),
        "14" => Some("UPS Next Day Air Early"),
        "54" => Some("UPS Worldwide Express Plus"),
        "59" => Some("UPS 2nd Day Air A.M."),
        "65" => Some("UPS Worldwide Saver"),
        _ => None,
    }
}

/// Returns the UPS packaging code for a packaging tag; an untagged package
/// is rated as customer-supplied packaging.
pub(crate) fn packaging_code(packaging_type: Option<PackagingType>) -> &'static str {
    match packaging_type {
        None | Some(PackagingType::Custom) => "02",
        Some(PackagingType::Letter) => "01",
        Some(PackagingType::Tube) => "03",
        Some(PackagingType::Pak) => "04",
        Some(PackagingType::SmallBox) => "2a",
        Some(PackagingType::MediumBox) => "2b",
        Some(PackagingType::LargeBox) => "2c",
    }
}

fn dimension_unit_code(unit: DimensionUnit) -> &'static str {
    match unit {
        DimensionUnit::Inch => "IN",
        DimensionUnit::Centimeter => "CM",
    }
}

fn weight_unit_code(unit: WeightUnit) -> &'static str {
    match unit {
        WeightUnit::Pound => "LBS",
        WeightUnit::Kilogram => "KGS",
    }
}

fn weight_unit_for_code(code: &str) -> Option<WeightUnit> {
    match code {
        "LBS" => Some(WeightUnit::Pound),
        "KGS" => Some(WeightUnit::Kilogram),
        _ => None,
    }
}

/// Builds the wire rating request for a validated domain request.
///
/// The request mode is `"Rate"` when a service level is set and `"Shop"`
/// otherwise; the mode is a payload field, the endpoint choice belongs to
/// the rating operation.
pub(crate) fn build_rate_request(request: &RateRequest, shipper_number: &str) -> WireRateRequest {
    let request_option = if request.service_level().is_some() {
        REQUEST_OPTION_RATE
    } else {
        REQUEST_OPTION_SHOP
    };

    WireRateRequest {
        rate_request: WireRateRequestBody {
            request: WireRequestSection {
                request_option: request_option.to_string(),
            },
            shipment: WireShipment {
                shipper: WireShipper {
                    name: request.origin().name().to_string(),
                    shipper_number: shipper_number.to_string(),
                    address: wire_address(request.origin()),
                },
                ship_to: wire_party(request.destination()),
                ship_from: wire_party(request.origin()),
                service: request
                    .service_level()
                    .map(|level| WireCodeDescription::new(service_code(level))),
                packages: request.packages().iter().map(wire_package).collect(),
            },
        },
    }
}

fn wire_party(address: &Address) -> WireParty {
    WireParty {
        name: address.name().to_string(),
        address: wire_address(address),
    }
}

fn wire_address(address: &Address) -> WireAddress {
    WireAddress {
        address_line: address.street_lines().to_vec(),
        city: address.city().to_string(),
        state_province_code: address.state_province().to_string(),
        postal_code: address.postal_code().to_string(),
        country_code: address.country().to_string(),
        residential_address_indicator: address.is_residential().then(|| "Y".to_string()),
    }
}

fn wire_package(package: &Package) -> WirePackage {
    let dimensions = package.dimensions();
    let weight = package.weight();

    WirePackage {
        packaging_type: WireCodeDescription::new(packaging_code(package.packaging_type())),
        dimensions: WireDimensions {
            unit_of_measurement: WireCodeDescription::new(dimension_unit_code(dimensions.unit())),
            length: dimensions.length().to_string(),
            width: dimensions.width().to_string(),
            height: dimensions.height().to_string(),
        },
        package_weight: WirePackageWeight {
            unit_of_measurement: WireCodeDescription::new(weight_unit_code(weight.unit())),
            weight: weight.value().to_string(),
        },
        package_service_options: package.declared_value().map(|declared| {
            WirePackageServiceOptions {
                declared_value: WireMonetary {
                    currency_code: declared.currency().to_string(),
                    monetary_value: declared.amount().to_string(),
                },
            }
        }),
    }
}

/// Maps one rated shipment into a domain quote.
///
/// # Errors
///
/// Returns a malformed-response error when the service code or total
/// charges are absent, or when a charge amount fails to parse as a decimal.
pub(crate) fn quote_from_rated_shipment(
    rated: WireRatedShipment,
    carrier: &CarrierId,
) -> CarrierResult<RateQuote> {
    let service = rated.service.ok_or_else(|| {
        CarrierError::malformed_response(carrier.clone(), "rated shipment is missing Service")
    })?;
    let total_wire = rated.total_charges.ok_or_else(|| {
        CarrierError::malformed_response(carrier.clone(), "rated shipment is missing TotalCharges")
    })?;
    let total = money_from_wire(&total_wire, carrier)?;
    let base = match rated.transportation_charges {
        Some(ref wire) => money_from_wire(wire, carrier)?,
        None => total.clone(),
    };

    let mut surcharges = Vec::new();
    for charge in rated
        .itemized_charges
        .map(|charges| charges.into_vec())
        .unwrap_or_default()
    {
        let Some(raw_amount) = charge.monetary_value else {
            continue;
        };
        let amount = parse_decimal(&raw_amount, carrier)?;
        if amount <= Decimal::ZERO {
            continue;
        }
        let currency = charge
            .currency_code
            .unwrap_or_else(|| total.currency().to_string());
        surcharges.push(Surcharge::new(
            charge.code.unwrap_or_default(),
            charge.description,
            Money::new(amount, currency),
        ));
    }

    // First present location wins; a present-but-unparseable value does not
    // fall through to the other location.
    let transit_source = rated
        .guaranteed_delivery
        .as_ref()
        .and_then(|guaranteed| guaranteed.business_days_in_transit.clone())
        .or_else(|| {
            rated
                .time_in_transit
                .as_ref()
                .and_then(|tit| tit.service_summary.as_ref())
                .and_then(|summary| summary.estimated_arrival.as_ref())
                .and_then(|arrival| arrival.business_days_in_transit.clone())
        });
    let transit_days = transit_source.and_then(|days| days.trim().parse::<u32>().ok());

    let estimated_delivery = rated
        .time_in_transit
        .as_ref()
        .and_then(|tit| tit.service_summary.as_ref())
        .and_then(|summary| summary.estimated_arrival.as_ref())
        .and_then(|arrival| arrival.arrival.as_ref())
        .and_then(|arrival| arrival.date.clone());

    let billing_weight = rated.billing_weight.and_then(|wire| {
        let unit = wire
            .unit_of_measurement
            .and_then(|uom| weight_unit_for_code(&uom.code))?;
        let value = wire
            .weight
            .and_then(|weight| Decimal::from_str(weight.trim()).ok())?;
        Some(Weight::new(value, unit))
    });

    let service_name = service_display_name(&service.code)
        .map(str::to_string)
        .or(service.description)
        .unwrap_or_else(|| format!("Service {}", service.code));

    let mut builder = RateQuote::builder(carrier.clone(), &service.code, service_name, total)
        .base_charges(base)
        .surcharges(surcharges)
        .guaranteed(rated.guaranteed_delivery.is_some());
    if let Some(level) = service_level_for_code(&service.code) {
        builder = builder.service_level(level);
    }
    if let Some(days) = transit_days {
        builder = builder.transit_days(days);
    }
    if let Some(date) = estimated_delivery {
        builder = builder.estimated_delivery(date);
    }
    if let Some(weight) = billing_weight {
        builder = builder.billing_weight(weight);
    }

    Ok(builder.build())
}

fn money_from_wire(wire: &WireMonetary, carrier: &CarrierId) -> CarrierResult<Money> {
    let amount = parse_decimal(&wire.monetary_value, carrier)?;
    Ok(Money::new(amount, wire.currency_code.clone()))
}

fn parse_decimal(raw: &str, carrier: &CarrierId) -> CarrierResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| {
        CarrierError::malformed_response(
            carrier.clone(),
            format!("charge amount '{raw}' is not a decimal"),
        )
    })
}
