//! AutoRent core - shared value types.
//!
//! This crate provides the types used by the site and its tests:
//! - `site` - Public marketing site, dashboards and booking lookup
//! - `integration-tests` - End-to-end tests against a spawned site
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients. Identity, bookings and fleet data live in the external service
//! layer; these types describe what the site receives from it.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, roles, emails, phone numbers, booking references, prices
//!   and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
