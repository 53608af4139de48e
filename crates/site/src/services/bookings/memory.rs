//! In-memory booking directory seeded with the sample catalog.

use async_trait::async_trait;

use autorent_core::{BookingReference, UserId};

use super::{BookingDirectory, BookingError};
use crate::catalog;
use crate::models::Booking;

/// Booking directory over a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingDirectory {
    bookings: Vec<Booking>,
}

impl InMemoryBookingDirectory {
    #[must_use]
    pub fn new(mut bookings: Vec<Booking>) -> Self {
        bookings.sort_by(|a, b| b.pickup_at.cmp(&a.pickup_at));
        Self { bookings }
    }

    #[must_use]
    pub fn with_sample_bookings() -> Self {
        Self::new(catalog::bookings())
    }
}

#[async_trait]
impl BookingDirectory for InMemoryBookingDirectory {
    async fn find_by_reference(
        &self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, BookingError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| &b.reference == reference)
            .cloned())
    }

    async fn for_customer(&self, customer_id: UserId) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_reference() {
        let directory = InMemoryBookingDirectory::with_sample_bookings();
        let reference = BookingReference::parse(" ar-2026-cbvs ").unwrap();
        let booking = directory.find_by_reference(&reference).await.unwrap();
        assert_eq!(booking.unwrap().customer_name, "Amara Okafor");
    }

    #[tokio::test]
    async fn test_unknown_reference() {
        let directory = InMemoryBookingDirectory::with_sample_bookings();
        let reference = BookingReference::parse("AR-0000-NONE").unwrap();
        assert!(directory.find_by_reference(&reference).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let directory = InMemoryBookingDirectory::with_sample_bookings();
        let recent = directory.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|w| w[0].pickup_at >= w[1].pickup_at));
    }

    #[tokio::test]
    async fn test_for_customer() {
        let directory = InMemoryBookingDirectory::with_sample_bookings();
        let bookings = directory.for_customer(UserId::new(103)).await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(bookings.iter().all(|b| b.customer_id == UserId::new(103)));
    }
}
