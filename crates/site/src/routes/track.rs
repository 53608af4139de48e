//! Booking lookup by reference.
//!
//! The form needs no account. The reference is uppercased as typed by
//! `track.js` and normalized again here, so the form works without scripts.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use autorent_core::BookingReference;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::OptionalToken;
use crate::models::{Booking, track_path};
use crate::state::AppState;

/// Lookup form data.
#[derive(Debug, Deserialize)]
pub struct TrackForm {
    #[serde(default)]
    pub reference: String,
}

/// Lookup form template.
#[derive(Template, WebTemplate)]
#[template(path = "track/form.html")]
pub struct TrackFormTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub error: Option<String>,
    pub reference: String,
}

/// Booking detail template.
#[derive(Template, WebTemplate)]
#[template(path = "track/detail.html")]
pub struct TrackDetailTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub booking: Booking,
}

/// Unknown reference template.
#[derive(Template, WebTemplate)]
#[template(path = "track/not_found.html")]
pub struct TrackNotFoundTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub reference: String,
}

fn form_meta() -> PageMetadata {
    PageMetadata::new()
        .title("Track your booking")
        .description("Look up the status of any AutoRent Tours booking with its reference number.")
        .canonical("/track")
}

/// Where a submitted form value leads.
///
/// # Errors
///
/// Returns the message to show inline when nothing usable was entered.
pub fn lookup_target(input: &str) -> std::result::Result<String, String> {
    BookingReference::parse(input)
        .map(|reference| track_path(&reference))
        .map_err(|e| e.to_string())
}

/// Display the lookup form.
#[instrument(skip_all)]
pub async fn form(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    TrackFormTemplate {
        head: state.head().sync(&form_meta()),
        signed_in: token.is_some(),
        error: None,
        reference: String::new(),
    }
}

/// Handle the lookup form.
///
/// Blank input re-renders the form with an inline message and status 422.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
    Form(form): Form<TrackForm>,
) -> Response {
    match lookup_target(&form.reference) {
        Ok(target) => Redirect::to(&target).into_response(),
        Err(message) => {
            let template = TrackFormTemplate {
                head: state.head().sync(&form_meta()),
                signed_in: token.is_some(),
                error: Some(message),
                reference: form.reference,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, template).into_response()
        }
    }
}

/// Display one booking.
///
/// Non-canonical references (lowercase, padded) redirect to their canonical
/// form. Unknown references render a 404 page with the form.
///
/// # Errors
///
/// Returns an error if the booking directory is unreachable.
#[instrument(skip(state, token))]
pub async fn detail(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
    Path(raw): Path<String>,
) -> Result<Response> {
    let Ok(reference) = BookingReference::parse(&raw) else {
        return Ok(Redirect::to("/track").into_response());
    };
    if reference.as_str() != raw {
        return Ok(Redirect::to(&track_path(&reference)).into_response());
    }

    let signed_in = token.is_some();
    let booking = state.bookings().find_by_reference(&reference).await?;
    add_breadcrumb(
        "track",
        "Looked up booking",
        Some(&[("reference", reference.as_str())]),
    );

    let Some(booking) = booking else {
        tracing::info!(reference = %reference, "Booking reference not found");
        let meta = PageMetadata::new().title("Booking not found").no_index();
        let template = TrackNotFoundTemplate {
            head: state.head().sync(&meta),
            signed_in,
            reference: reference.to_string(),
        };
        return Ok((StatusCode::NOT_FOUND, template).into_response());
    };

    let meta = PageMetadata::new()
        .title(format!("Booking {reference}"))
        .no_index();
    Ok(TrackDetailTemplate {
        head: state.head().sync(&meta),
        signed_in,
        booking,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_reference_stays_on_form() {
        assert_eq!(
            lookup_target("  ").unwrap_err(),
            "Please enter your booking reference number"
        );
        assert!(lookup_target("").is_err());
    }

    #[test]
    fn test_reference_normalized_into_path() {
        assert_eq!(
            lookup_target(" ar-2026-cbvs ").as_deref(),
            Ok("/track/AR-2026-CBVS")
        );
    }
}
