//! # Domain Entities
//!
//! Data contracts for shipment descriptions and rate quotes.
//!
//! ## Request Side
//!
//! - [`Address`]: Shipment origin or destination
//! - [`Package`]: Physical package with dimensions, weight, and options
//! - [`RateRequest`]: Normalized rating request
//!
//! ## Response Side
//!
//! - [`RateQuote`]: One priced service offer
//! - [`RateResponse`]: Aggregated, price-sorted quotes

pub mod address;
pub mod package;
pub mod rate_quote;
pub mod rate_request;
pub mod rate_response;

pub use address::Address;
pub use package::{Dimensions, Package, Weight};
pub use rate_quote::{RateQuote, RateQuoteBuilder, Surcharge};
pub use rate_request::{RateRequest, RateRequestBuilder};
pub use rate_response::RateResponse;
