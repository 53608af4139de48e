//! Status enums for bookings, vehicles and drivers.
//!
//! Values mirror what the external service layer reports; the site only
//! displays them.

use serde::{Deserialize, Serialize};

/// Lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Label shown to customers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending confirmation",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "On the road",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether the booking still lies ahead or is running.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::InProgress)
    }
}

/// Availability of a fleet vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
    Retired,
}

impl VehicleStatus {
    /// Label shown in the fleet table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "In maintenance",
            Self::Retired => "Retired",
        }
    }
}

/// Duty status of a tour driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[default]
    OffDuty,
    OnDuty,
    OnTour,
    OnLeave,
}

impl DriverStatus {
    /// Label shown in the drivers table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OffDuty => "Off duty",
            Self::OnDuty => "On duty",
            Self::OnTour => "On tour",
            Self::OnLeave => "On leave",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_active() {
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::InProgress.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: VehicleStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(status, VehicleStatus::Maintenance);
        let driver: DriverStatus = serde_json::from_str("\"on_tour\"").unwrap();
        assert_eq!(driver.label(), "On tour");
    }
}
