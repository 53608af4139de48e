//! Core types for AutoRent.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod phone;
pub mod price;
pub mod reference;
pub mod role;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{PhoneNumber, PhoneNumberError};
pub use price::{CurrencyCode, Price};
pub use reference::{BookingReference, BookingReferenceError, uppercase_as_typed};
pub use role::{Role, RoleParseError};
pub use status::*;
