//! Booking records as returned by the booking directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autorent_core::{BookingId, BookingReference, BookingStatus, Price, UserId};

/// A rental or tour booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub reference: BookingReference,
    pub customer_id: UserId,
    pub customer_name: String,
    /// Vehicle description, e.g. "Toyota Land Cruiser 2024".
    pub vehicle: String,
    /// Guided tour attached to the rental, if any.
    #[serde(default)]
    pub tour: Option<String>,
    pub pickup_location: String,
    pub pickup_at: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub total: Price,
}

impl Booking {
    /// Number of rental days, counting a started day as a full day.
    #[must_use]
    pub fn rental_days(&self) -> i64 {
        let hours = (self.return_at - self.pickup_at).num_hours().max(0);
        ((hours + 23) / 24).max(1)
    }

    /// Pickup time as shown on dashboards, e.g. "3 Nov 2026, 09:00".
    #[must_use]
    pub fn pickup_label(&self) -> String {
        self.pickup_at.format(DATE_LABEL_FORMAT).to_string()
    }

    #[must_use]
    pub fn return_label(&self) -> String {
        self.return_at.format(DATE_LABEL_FORMAT).to_string()
    }

    /// Path of the public lookup page for this booking.
    #[must_use]
    pub fn track_path(&self) -> String {
        track_path(&self.reference)
    }
}

const DATE_LABEL_FORMAT: &str = "%-d %b %Y, %H:%M";

/// Path of the lookup page for a reference, percent-encoded.
#[must_use]
pub fn track_path(reference: &BookingReference) -> String {
    format!("/track/{}", urlencoding::encode(reference.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use autorent_core::CurrencyCode;

    use super::*;

    fn booking(hours: i64) -> Booking {
        let pickup_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        Booking {
            id: BookingId::new(1),
            reference: BookingReference::parse("AR-2026-TEST").unwrap(),
            customer_id: UserId::new(1),
            customer_name: "Test Customer".to_string(),
            vehicle: "Suzuki Jimny".to_string(),
            tour: None,
            pickup_location: "Airport".to_string(),
            pickup_at,
            return_at: pickup_at + chrono::Duration::hours(hours),
            status: BookingStatus::Confirmed,
            total: Price::from_cents(10_000, CurrencyCode::USD),
        }
    }

    #[test]
    fn test_rental_days_rounds_up() {
        assert_eq!(booking(24).rental_days(), 1);
        assert_eq!(booking(25).rental_days(), 2);
        assert_eq!(booking(72).rental_days(), 3);
    }

    #[test]
    fn test_labels() {
        let b = booking(48);
        assert_eq!(b.pickup_label(), "1 Mar 2026, 09:00");
        assert_eq!(b.return_label(), "3 Mar 2026, 09:00");
    }

    #[test]
    fn test_track_path_encodes() {
        assert_eq!(booking(1).track_path(), "/track/AR-2026-TEST");
        let spaced = BookingReference::parse("ar 77").unwrap();
        assert_eq!(track_path(&spaced), "/track/AR%2077");
    }

    #[test]
    fn test_rental_days_minimum_one() {
        assert_eq!(booking(0).rental_days(), 1);
    }
}
