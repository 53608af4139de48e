//! Domain models for the site.
//!
//! - [`user`] - Identity as reported by the session oracle
//! - [`booking`] - Booking records read from the booking directory
//! - [`session`] - Values stored in the cookie session

pub mod booking;
pub mod session;
pub mod user;

pub use booking::{Booking, track_path};
pub use session::{AccessToken, keys as session_keys};
pub use user::User;
