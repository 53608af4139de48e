//! Booking directory: read-only access to bookings held by the service layer.

mod http;
mod memory;

pub use http::HttpBookingDirectory;
pub use memory::InMemoryBookingDirectory;

use async_trait::async_trait;
use thiserror::Error;

use autorent_core::{BookingReference, UserId};

use crate::models::Booking;

/// Errors reading from the booking directory.
#[derive(Debug, Error)]
pub enum BookingError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be built.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The service answered with a status this client does not handle.
    #[error("unexpected status {0} from booking directory")]
    UnexpectedStatus(u16),

    /// The service answered with a body this client could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Looks up bookings by reference, customer or recency.
#[async_trait]
pub trait BookingDirectory: Send + Sync {
    /// Find one booking by its reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be reached.
    async fn find_by_reference(
        &self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, BookingError>;

    /// All bookings of one customer, newest pickup first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be reached.
    async fn for_customer(&self, customer_id: UserId) -> Result<Vec<Booking>, BookingError>;

    /// The most recent bookings across all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be reached.
    async fn recent(&self, limit: usize) -> Result<Vec<Booking>, BookingError>;
}
