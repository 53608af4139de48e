//! AutoRent Tours site library.
//!
//! Marketing pages, account dashboards and the booking lookup, rendered on
//! the server. Authentication and booking data come from an external service
//! layer behind the [`services::SessionOracle`] and
//! [`services::BookingDirectory`] traits.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod guard;
pub mod head;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use app::build_app;
