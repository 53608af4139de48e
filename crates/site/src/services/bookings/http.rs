//! Booking directory backed by the external service's HTTP API.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;

use autorent_core::{BookingReference, UserId};

use super::{BookingDirectory, BookingError};
use crate::models::Booking;
use crate::services::ServiceEndpoint;

/// HTTP client for the `/bookings` endpoints.
#[derive(Clone)]
pub struct HttpBookingDirectory {
    endpoint: ServiceEndpoint,
}

impl HttpBookingDirectory {
    #[must_use]
    pub const fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }

    async fn list(&self, query: &[(&str, String)]) -> Result<Vec<Booking>, BookingError> {
        let url = self.endpoint.url("bookings")?;
        let response = self
            .endpoint
            .request(Method::GET, url)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::UnexpectedStatus(status.as_u16()));
        }
        decode(&response.text().await?)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, BookingError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(200).collect::<String>(),
            "Failed to parse booking directory response"
        );
        BookingError::InvalidResponse(e.to_string())
    })
}

#[async_trait]
impl BookingDirectory for HttpBookingDirectory {
    #[instrument(skip(self), fields(reference = %reference))]
    async fn find_by_reference(
        &self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, BookingError> {
        let path = format!("bookings/{}", urlencoding::encode(reference.as_str()));
        let url = self.endpoint.url(&path)?;
        let response = self.endpoint.request(Method::GET, url).send().await?;

        match response.status() {
            StatusCode::OK => decode(&response.text().await?).map(Some),
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(BookingError::UnexpectedStatus(other.as_u16())),
        }
    }

    #[instrument(skip(self))]
    async fn for_customer(&self, customer_id: UserId) -> Result<Vec<Booking>, BookingError> {
        self.list(&[("customer_id", customer_id.to_string())]).await
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: usize) -> Result<Vec<Booking>, BookingError> {
        self.list(&[("limit", limit.to_string())]).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use autorent_core::BookingStatus;

    use super::*;

    #[test]
    fn test_decode_booking_list() {
        let json = r#"[{
            "id": 9,
            "reference": "AR-2026-ZZZZ",
            "customer_id": 101,
            "customer_name": "Amara Okafor",
            "vehicle": "Suzuki Jimny 2023",
            "pickup_location": "Airport",
            "pickup_at": "2026-11-03T09:00:00Z",
            "return_at": "2026-11-05T09:00:00Z",
            "status": "confirmed",
            "total": {"amount": "118.00", "currency_code": "USD"}
        }]"#;
        let bookings: Vec<Booking> = decode(json).unwrap();
        assert_eq!(bookings.len(), 1);
        assert!(bookings[0].tour.is_none());
        assert_eq!(bookings[0].status, BookingStatus::Confirmed);
        assert_eq!(bookings[0].rental_days(), 2);
    }
}
