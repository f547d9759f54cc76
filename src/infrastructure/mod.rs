//! # Infrastructure Layer
//!
//! Integrations with external systems.
//!
//! Currently this is the carrier integrations module; every external call
//! the crate makes goes through a carrier backend registered in
//! [`carriers::CarrierRegistry`].

pub mod carriers;
