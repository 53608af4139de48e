//! Informational pages: features and pricing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::{self, Feature, PricingPlan, Tour, Vehicle};
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::OptionalToken;
use crate::state::AppState;

/// Features page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/features.html")]
pub struct FeaturesTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub features: Vec<Feature>,
    pub vehicles: Vec<Vehicle>,
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/pricing.html")]
pub struct PricingTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub plans: Vec<PricingPlan>,
    pub tours: Vec<Tour>,
}

/// Display the features page.
#[instrument(skip_all)]
pub async fn features(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    let meta = PageMetadata::new()
        .title("Features")
        .description("A well-kept fleet, local drivers and booking tracking by reference.")
        .canonical("/features");

    FeaturesTemplate {
        head: state.head().sync(&meta),
        signed_in: token.is_some(),
        features: catalog::features(),
        vehicles: catalog::vehicles(),
    }
}

/// Display the pricing page.
#[instrument(skip_all)]
pub async fn pricing(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    let plans = catalog::pricing_plans();
    let offers: Vec<_> = plans
        .iter()
        .map(|plan| {
            serde_json::json!({
                "@type": "Offer",
                "name": plan.name,
                "price": plan.daily_rate.amount.to_string(),
                "priceCurrency": plan.daily_rate.currency_code.code(),
            })
        })
        .collect();

    let meta = PageMetadata::new()
        .title("Pricing")
        .description("Daily rates with insurance included, from city cars to guided 4x4 tours.")
        .keywords(["car rental prices", "tour prices"])
        .canonical("/pricing")
        .structured_data(serde_json::json!({
            "@context": "https://schema.org",
            "@type": "OfferCatalog",
            "name": "Rental plans",
            "itemListElement": offers,
        }));

    PricingTemplate {
        head: state.head().sync(&meta),
        signed_in: token.is_some(),
        plans,
        tours: catalog::tours(),
    }
}
