//! Static sample data shown on the marketing pages and dashboards.
//!
//! Fleet, drivers and customers are display-only here. The service layer
//! owns the real records; the back office only renders these tables.

use chrono::{DateTime, TimeZone, Utc};

use autorent_core::{
    BookingId, BookingReference, BookingStatus, CurrencyCode, DriverId, DriverStatus, Price,
    UserId, VehicleId, VehicleStatus,
};

use crate::models::Booking;

/// A vehicle in the rental fleet.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: &'static str,
    pub category: &'static str,
    pub seats: u8,
    pub transmission: &'static str,
    pub plate: &'static str,
    pub daily_rate: Price,
    pub status: VehicleStatus,
}

/// A tour driver.
#[derive(Debug, Clone)]
pub struct Driver {
    pub id: DriverId,
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub years_experience: u8,
    pub status: DriverStatus,
}

/// A customer row in the back-office table.
#[derive(Debug, Clone)]
pub struct CustomerSummary {
    pub id: UserId,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub bookings: u32,
    pub member_since: &'static str,
}

/// A guided tour offered alongside rentals.
#[derive(Debug, Clone)]
pub struct Tour {
    pub name: &'static str,
    pub duration: &'static str,
    pub summary: &'static str,
    pub price: Price,
}

/// A pricing tier on the pricing page.
#[derive(Debug, Clone)]
pub struct PricingPlan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub daily_rate: Price,
    pub perks: &'static [&'static str],
    pub highlighted: bool,
}

/// A marketing feature card.
#[derive(Debug, Clone)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

/// A customer quote on the landing page.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub trip: &'static str,
}

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

#[must_use]
pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: VehicleId::new(1),
            name: "Toyota Land Cruiser 2024",
            category: "4x4 SUV",
            seats: 7,
            transmission: "Automatic",
            plate: "AR-4411",
            daily_rate: usd(12_900),
            status: VehicleStatus::Rented,
        },
        Vehicle {
            id: VehicleId::new(2),
            name: "Suzuki Jimny 2023",
            category: "Compact 4x4",
            seats: 4,
            transmission: "Manual",
            plate: "AR-2087",
            daily_rate: usd(5_900),
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: VehicleId::new(3),
            name: "Toyota Corolla Hybrid",
            category: "Sedan",
            seats: 5,
            transmission: "Automatic",
            plate: "AR-1530",
            daily_rate: usd(4_500),
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: VehicleId::new(4),
            name: "Mercedes-Benz Sprinter",
            category: "Minibus",
            seats: 12,
            transmission: "Automatic",
            plate: "AR-9902",
            daily_rate: usd(18_500),
            status: VehicleStatus::Maintenance,
        },
        Vehicle {
            id: VehicleId::new(5),
            name: "Nissan Patrol 2022",
            category: "4x4 SUV",
            seats: 7,
            transmission: "Automatic",
            plate: "AR-3376",
            daily_rate: usd(11_000),
            status: VehicleStatus::Available,
        },
    ]
}

#[must_use]
pub fn drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: DriverId::new(1),
            name: "Samuel Mensah",
            languages: &["English", "French"],
            years_experience: 12,
            status: DriverStatus::OnTour,
        },
        Driver {
            id: DriverId::new(2),
            name: "Ines Carvalho",
            languages: &["Portuguese", "English", "Spanish"],
            years_experience: 7,
            status: DriverStatus::OnDuty,
        },
        Driver {
            id: DriverId::new(3),
            name: "Omar Haddad",
            languages: &["Arabic", "English"],
            years_experience: 9,
            status: DriverStatus::OffDuty,
        },
        Driver {
            id: DriverId::new(4),
            name: "Freya Lindqvist",
            languages: &["Swedish", "English", "German"],
            years_experience: 4,
            status: DriverStatus::OnLeave,
        },
    ]
}

#[must_use]
pub fn customers() -> Vec<CustomerSummary> {
    vec![
        CustomerSummary {
            id: UserId::new(101),
            name: "Amara Okafor",
            email: "amara@autorent.tours",
            phone: "+15550102030",
            bookings: 3,
            member_since: "March 2024",
        },
        CustomerSummary {
            id: UserId::new(102),
            name: "Diego Ramirez",
            email: "diego.ramirez@example.org",
            phone: "+525512345678",
            bookings: 1,
            member_since: "January 2026",
        },
        CustomerSummary {
            id: UserId::new(103),
            name: "Hannah Schulz",
            email: "hannah.schulz@example.org",
            phone: "+4915112345678",
            bookings: 2,
            member_since: "August 2025",
        },
    ]
}

#[must_use]
pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            name: "Coastal Highlights",
            duration: "Full day",
            summary: "Cliff roads, fishing villages and a seafood lunch stop.",
            price: usd(8_900),
        },
        Tour {
            name: "Desert Sunset Safari",
            duration: "Half day",
            summary: "Dune driving with an experienced guide, ending at golden hour.",
            price: usd(6_500),
        },
        Tour {
            name: "Mountain Pass Expedition",
            duration: "Two days",
            summary: "High passes, a night at a mountain lodge and guided hikes.",
            price: usd(24_000),
        },
    ]
}

#[must_use]
pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Economy",
            tagline: "City trips and short hops",
            daily_rate: usd(4_500),
            perks: &["Compact or sedan", "200 km per day", "Basic insurance"],
            highlighted: false,
        },
        PricingPlan {
            name: "Explorer",
            tagline: "Our most booked option",
            daily_rate: usd(9_900),
            perks: &[
                "4x4 SUV",
                "Unlimited kilometres",
                "Full insurance",
                "Free airport pickup",
            ],
            highlighted: true,
        },
        PricingPlan {
            name: "Guided",
            tagline: "Vehicle with a professional driver",
            daily_rate: usd(19_900),
            perks: &[
                "Driver and guide included",
                "Tour of your choice",
                "Fuel included",
                "Hotel pickup",
            ],
            highlighted: false,
        },
    ]
}

#[must_use]
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Well-kept fleet",
            body: "Every vehicle is inspected between rentals and serviced on schedule.",
        },
        Feature {
            title: "Local drivers",
            body: "Licensed guides who know the back roads and speak your language.",
        },
        Feature {
            title: "Transparent pricing",
            body: "One daily rate with insurance included. No surprises at the counter.",
        },
        Feature {
            title: "Track your booking",
            body: "Look up any booking with its reference number, no account needed.",
        },
    ]
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The Land Cruiser was spotless and Samuel knew every viewpoint on the coast.",
            author: "Priya N.",
            trip: "Coastal Highlights",
        },
        Testimonial {
            quote: "Pickup at the airport took five minutes. Easiest rental we have ever had.",
            author: "Tom and Lisa K.",
            trip: "Explorer rental, 6 days",
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: i64,
    reference: &str,
    customer: (i64, &str),
    vehicle: &str,
    tour: Option<&str>,
    pickup_location: &str,
    (pickup_at, return_at): (DateTime<Utc>, DateTime<Utc>),
    status: BookingStatus,
    total: Price,
) -> Option<Booking> {
    Some(Booking {
        id: BookingId::new(id),
        reference: BookingReference::parse(reference).ok()?,
        customer_id: UserId::new(customer.0),
        customer_name: customer.1.to_string(),
        vehicle: vehicle.to_string(),
        tour: tour.map(str::to_string),
        pickup_location: pickup_location.to_string(),
        pickup_at,
        return_at,
        status,
        total,
    })
}

/// Sample bookings served by the in-memory booking directory.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn bookings() -> Vec<Booking> {
    [
        booking(
            1,
            "AR-2026-CBVS",
            (101, "Amara Okafor"),
            "Toyota Land Cruiser 2024",
            Some("Coastal Highlights"),
            "Airport arrivals hall",
            (at(2026, 11, 3, 9), at(2026, 11, 8, 9)),
            BookingStatus::Confirmed,
            usd(73_400),
        ),
        booking(
            2,
            "AR-2026-K7TD",
            (101, "Amara Okafor"),
            "Suzuki Jimny 2023",
            None,
            "Downtown office",
            (at(2026, 6, 12, 10), at(2026, 6, 15, 10)),
            BookingStatus::Completed,
            usd(17_700),
        ),
        booking(
            3,
            "AR-2026-M2QX",
            (102, "Diego Ramirez"),
            "Nissan Patrol 2022",
            Some("Desert Sunset Safari"),
            "Hotel Miramar",
            (at(2026, 10, 14, 8), at(2026, 10, 18, 8)),
            BookingStatus::InProgress,
            usd(50_500),
        ),
        booking(
            4,
            "AR-2026-P9LA",
            (103, "Hannah Schulz"),
            "Toyota Corolla Hybrid",
            None,
            "Airport arrivals hall",
            (at(2026, 12, 20, 14), at(2026, 12, 27, 14)),
            BookingStatus::Pending,
            usd(31_500),
        ),
        booking(
            5,
            "AR-2025-H4WE",
            (103, "Hannah Schulz"),
            "Mercedes-Benz Sprinter",
            Some("Mountain Pass Expedition"),
            "Central station",
            (at(2025, 9, 2, 7), at(2025, 9, 4, 19)),
            BookingStatus::Cancelled,
            usd(61_500),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_bookings_parse() {
        assert_eq!(bookings().len(), 5);
    }

    #[test]
    fn test_booking_references_unique() {
        let refs: HashSet<_> = bookings().into_iter().map(|b| b.reference).collect();
        assert_eq!(refs.len(), 5);
    }

    #[test]
    fn test_demo_customer_has_bookings() {
        let count = bookings()
            .iter()
            .filter(|b| b.customer_id == UserId::new(101))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        assert_eq!(pricing_plans().iter().filter(|p| p.highlighted).count(), 1);
    }
}
