//! Landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::{self, Feature, Testimonial, Tour};
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::OptionalToken;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub features: Vec<Feature>,
    pub tours: Vec<Tour>,
    pub testimonials: Vec<Testimonial>,
}

/// Organization JSON-LD for the landing page.
fn organization_schema(state: &AppState) -> serde_json::Value {
    let identity = state.head().identity();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "AutoRental",
        "name": identity.site_name,
        "url": identity.base_url.as_str(),
        "image": identity.absolute(&identity.default_image),
        "priceRange": "$$",
    })
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>, OptionalToken(token): OptionalToken) -> impl IntoResponse {
    let meta = PageMetadata::new()
        .canonical("/")
        .keywords(["car rental", "guided tours", "4x4 hire", "airport pickup"])
        .structured_data(organization_schema(&state));

    HomeTemplate {
        head: state.head().sync(&meta),
        signed_in: token.is_some(),
        features: catalog::features(),
        tours: catalog::tours(),
        testimonials: catalog::testimonials(),
    }
}
