//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Landing page
//! GET  /features                  - Features
//! GET  /pricing                   - Pricing
//! GET  /resources                 - Article index
//! GET  /resources/:slug           - Article
//!
//! # Auth
//! GET  /login                     - Login page
//! POST /login                     - Login action (rate limited)
//! GET  /register                  - Register page
//! POST /register                  - Register action (rate limited)
//! POST /logout                    - Logout action
//!
//! # Booking lookup
//! GET  /track                     - Lookup form
//! POST /track                     - Lookup action, 303 to the detail page
//! GET  /track/:reference          - Booking detail
//!
//! # Customer area (access guard, customer policy)
//! GET  /customer/dashboard        - Customer bookings
//!
//! # Admin area (access guard, admin policy)
//! GET  /admin/dashboard           - Overview
//! GET  /admin/fleet               - Vehicles
//! GET  /admin/bookings            - Recent bookings
//! GET  /admin/customers           - Customers
//! GET  /admin/drivers             - Drivers
//!
//! GET  /health                    - Liveness
//! GET  /health/ready              - Readiness (session oracle reachable)
//! ```

pub mod admin;
pub mod auth;
pub mod customer;
pub mod health;
pub mod home;
pub mod not_found;
pub mod pages;
pub mod resources;
pub mod track;

use axum::{
    Router,
    routing::{get, post},
};

use crate::guard::{require_admin_area, require_customer_area};
use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    let limiter = auth_rate_limiter();
    Router::new()
        .route(
            "/login",
            get(auth::login_page).merge(post(auth::login).layer(limiter.clone())),
        )
        .route(
            "/register",
            get(auth::register_page).merge(post(auth::register).layer(limiter)),
        )
        .route("/logout", post(auth::logout))
}

/// Create the customer area router, wrapped by the access guard.
pub fn customer_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(customer::dashboard))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_customer_area,
        ))
}

/// Create the admin area router, wrapped by the access guard.
pub fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/fleet", get(admin::fleet))
        .route("/bookings", get(admin::bookings))
        .route("/customers", get(admin::customers))
        .route("/drivers", get(admin::drivers))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_admin_area,
        ))
}

/// Create the booking lookup router.
pub fn track_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(track::form).post(track::submit))
        .route("/{reference}", get(track::detail))
}

/// Create all page routes.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/features", get(pages::features))
        .route("/pricing", get(pages::pricing))
        .route("/resources", get(resources::index))
        .route("/resources/{slug}", get(resources::show))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(auth_routes())
        .nest("/track", track_routes())
        .nest("/customer", customer_routes(state))
        .nest("/admin", admin_routes(state))
        .fallback(not_found::fallback)
}
