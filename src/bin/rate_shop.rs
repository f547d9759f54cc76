//! Demo CLI: fetch live rate quotes for a single-package shipment.
//!
//! Credentials come from `UPS_`-prefixed environment variables (a `.env`
//! file is honored). Example:
//!
//! ```text
//! rate-shop --origin-postal 40201 --origin-state KY \
//!           --dest-postal 97201 --dest-state OR --weight 5
//! ```

use anyhow::Result;
use clap::Parser;
use rate_shop::application::RateShoppingService;
use rate_shop::domain::entities::{Address, Dimensions, Package, RateRequest, Weight};
use rate_shop::domain::value_objects::{DimensionUnit, ServiceLevel, WeightUnit};
use rate_shop::infrastructure::carriers::CarrierRegistry;
use rate_shop::infrastructure::carriers::ups::{UpsConfig, UpsProvider};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "rate-shop", about = "Fetch shipping rate quotes")]
struct Args {
    /// Origin postal code.
    #[arg(long, default_value = "40201")]
    origin_postal: String,

    /// Origin state or province code.
    #[arg(long, default_value = "KY")]
    origin_state: String,

    /// Destination postal code.
    #[arg(long, default_value = "97201")]
    dest_postal: String,

    /// Destination state or province code.
    #[arg(long, default_value = "OR")]
    dest_state: String,

    /// Country code for both ends.
    #[arg(long, default_value = "US")]
    country: String,

    /// Package weight in pounds.
    #[arg(long, default_value = "5")]
    weight: Decimal,

    /// Restrict to one service level (e.g. GROUND, TWO_DAY, OVERNIGHT).
    /// Omit to shop all services.
    #[arg(long)]
    service: Option<ServiceLevel>,

    /// Mark the destination as residential.
    #[arg(long)]
    residential: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut registry = CarrierRegistry::new();
    registry.register(Arc::new(UpsProvider::new(UpsConfig::from_env()?)?))?;
    let service = RateShoppingService::new(Arc::new(registry));

    let origin = Address::new(
        "Rate Shop Demo",
        vec!["100 Warehouse Way".to_string()],
        "Louisville",
        args.origin_state,
        args.origin_postal,
        args.country.clone(),
    );
    let mut destination = Address::new(
        "Demo Recipient",
        vec!["9 Elm St".to_string()],
        "Portland",
        args.dest_state,
        args.dest_postal,
        args.country,
    );
    if args.residential {
        destination = destination.with_residential();
    }

    let package = Package::new(
        Dimensions::new(
            Decimal::from(12),
            Decimal::from(8),
            Decimal::from(4),
            DimensionUnit::Inch,
        ),
        Weight::new(args.weight, WeightUnit::Pound),
    );

    let mut builder = RateRequest::builder(origin, destination).package(package);
    if let Some(level) = args.service {
        builder = builder.service_level(level);
    }
    let request = builder.build();

    let response = service.get_quotes(&request).await?;
    println!(
        "{} quote(s) from {} carrier(s):",
        response.len(),
        response.carriers().len()
    );
    for quote in response.quotes() {
        let transit = quote
            .transit_days()
            .map_or_else(String::new, |days| format!(" ({days} business days)"));
        let guaranteed = if quote.is_guaranteed() {
            " [guaranteed]"
        } else {
            ""
        };
        println!(
            "  {:<10} {:<28} {}{}{}",
            quote.carrier().as_str(),
            quote.service_name(),
            quote.total_charges(),
            transit,
            guaranteed
        );
    }

    Ok(())
}
