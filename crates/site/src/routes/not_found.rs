//! Catch-all not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::OptionalToken;
use crate::state::AppState;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
}

/// Render the not-found page with status 404.
pub fn not_found_page(state: &AppState, signed_in: bool) -> Response {
    let meta = PageMetadata::new().title("Page not found").no_index();
    let template = NotFoundTemplate {
        head: state.head().sync(&meta),
        signed_in,
    };
    (StatusCode::NOT_FOUND, template).into_response()
}

/// Router fallback.
pub async fn fallback(State(state): State<AppState>, OptionalToken(token): OptionalToken) -> Response {
    not_found_page(&state, token.is_some())
}
