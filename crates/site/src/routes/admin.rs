//! Back-office area for staff and admins. Every route here sits behind the
//! access guard with the admin policy.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use autorent_core::{DriverStatus, VehicleStatus};

use crate::catalog::{self, CustomerSummary, Driver, Vehicle};
use crate::error::Result;
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::SignedInUser;
use crate::models::{Booking, User};
use crate::state::AppState;

/// Bookings shown on the dashboard.
const DASHBOARD_RECENT_BOOKINGS: usize = 5;

/// Bookings shown on the bookings page.
const BOOKINGS_PAGE_LIMIT: usize = 50;

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStats {
    pub vehicles_available: usize,
    pub vehicles_rented: usize,
    pub vehicles_in_maintenance: usize,
    pub drivers_working: usize,
}

impl FleetStats {
    fn collect(vehicles: &[Vehicle], drivers: &[Driver]) -> Self {
        let count = |status| vehicles.iter().filter(|v| v.status == status).count();
        Self {
            vehicles_available: count(VehicleStatus::Available),
            vehicles_rented: count(VehicleStatus::Rented),
            vehicles_in_maintenance: count(VehicleStatus::Maintenance),
            drivers_working: drivers
                .iter()
                .filter(|d| matches!(d.status, DriverStatus::OnDuty | DriverStatus::OnTour))
                .count(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub active: &'static str,
    pub stats: FleetStats,
    pub recent: Vec<Booking>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/fleet.html")]
pub struct FleetTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub active: &'static str,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/bookings.html")]
pub struct BookingsTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub active: &'static str,
    pub bookings: Vec<Booking>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/customers.html")]
pub struct CustomersTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub active: &'static str,
    pub customers: Vec<CustomerSummary>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/drivers.html")]
pub struct DriversTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub active: &'static str,
    pub drivers: Vec<Driver>,
}

fn admin_meta(title: &str) -> PageMetadata {
    PageMetadata::new().title(title).no_index()
}

/// Display the admin dashboard.
///
/// # Errors
///
/// Returns an error if the booking directory is unreachable.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn dashboard(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> Result<impl IntoResponse> {
    let recent = state.bookings().recent(DASHBOARD_RECENT_BOOKINGS).await?;
    Ok(AdminDashboardTemplate {
        head: state.head().sync(&admin_meta("Admin dashboard")),
        signed_in: true,
        user,
        active: "dashboard",
        stats: FleetStats::collect(&catalog::vehicles(), &catalog::drivers()),
        recent,
    })
}

/// Display the fleet table.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn fleet(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> impl IntoResponse {
    FleetTemplate {
        head: state.head().sync(&admin_meta("Fleet")),
        signed_in: true,
        user,
        active: "fleet",
        vehicles: catalog::vehicles(),
    }
}

/// Display recent bookings.
///
/// # Errors
///
/// Returns an error if the booking directory is unreachable.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn bookings(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> Result<impl IntoResponse> {
    let bookings = state.bookings().recent(BOOKINGS_PAGE_LIMIT).await?;
    Ok(BookingsTemplate {
        head: state.head().sync(&admin_meta("Bookings")),
        signed_in: true,
        user,
        active: "bookings",
        bookings,
    })
}

/// Display the customer table.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn customers(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> impl IntoResponse {
    CustomersTemplate {
        head: state.head().sync(&admin_meta("Customers")),
        signed_in: true,
        user,
        active: "customers",
        customers: catalog::customers(),
    }
}

/// Display the driver roster.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn drivers(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> impl IntoResponse {
    DriversTemplate {
        head: state.head().sync(&admin_meta("Drivers")),
        signed_in: true,
        user,
        active: "drivers",
        drivers: catalog::drivers(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_stats_from_catalog() {
        let stats = FleetStats::collect(&catalog::vehicles(), &catalog::drivers());
        assert_eq!(stats.vehicles_available, 3);
        assert_eq!(stats.vehicles_rented, 1);
        assert_eq!(stats.vehicles_in_maintenance, 1);
        assert_eq!(stats.drivers_working, 2);
    }
}
