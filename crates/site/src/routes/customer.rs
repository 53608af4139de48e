//! Customer area. Every route here sits behind the access guard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::SignedInUser;
use crate::models::{Booking, User};
use crate::state::AppState;

/// Customer dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "customer/dashboard.html")]
pub struct CustomerDashboardTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub user: User,
    pub upcoming: Vec<Booking>,
    pub past: Vec<Booking>,
}

/// Display the customer dashboard.
///
/// # Errors
///
/// Returns an error if the booking directory is unreachable.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn dashboard(
    State(state): State<AppState>,
    SignedInUser(user): SignedInUser,
) -> Result<impl IntoResponse> {
    let (upcoming, past) = state
        .bookings()
        .for_customer(user.id)
        .await?
        .into_iter()
        .partition(|b| b.status.is_active());

    let meta = PageMetadata::new().title("My bookings").no_index();

    Ok(CustomerDashboardTemplate {
        head: state.head().sync(&meta),
        signed_in: true,
        user,
        upcoming,
        past,
    })
}
