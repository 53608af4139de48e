//! Resources section: travel guides written in markdown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use tracing::instrument;

use crate::content::Article;
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::OptionalToken;
use crate::routes::not_found::not_found_page;
use crate::state::AppState;

/// Number of related articles shown under an article.
const RELATED_COUNT: usize = 3;

/// Article view for templates.
#[derive(Clone)]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub published_at: NaiveDate,
    pub tags: Vec<String>,
    pub content_html: String,
    pub reading_time_minutes: u32,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.meta.title.clone(),
            description: article.meta.description.clone(),
            author: article.meta.author.clone(),
            published_at: article.meta.published_at,
            tags: article.meta.tags.clone(),
            content_html: article.content_html.clone(),
            reading_time_minutes: article.reading_time_minutes,
        }
    }
}

/// Resources index template.
#[derive(Template, WebTemplate)]
#[template(path = "resources/index.html")]
pub struct ResourcesIndexTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub articles: Vec<ArticleView>,
}

/// Resources article template.
#[derive(Template, WebTemplate)]
#[template(path = "resources/show.html")]
pub struct ResourceShowTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub article: ArticleView,
    pub related: Vec<ArticleView>,
}

/// List all published articles.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    let meta = PageMetadata::new()
        .title("Resources")
        .description("Driving guides, tour tips and answers to common rental questions.")
        .canonical("/resources");

    ResourcesIndexTemplate {
        head: state.head().sync(&meta),
        signed_in: token.is_some(),
        articles: state.content().published().map(ArticleView::from).collect(),
    }
}

/// Article JSON-LD.
fn article_schema(state: &AppState, article: &Article, canonical: &str) -> serde_json::Value {
    let identity = state.head().identity();
    let timestamps = article.timestamps();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.meta.title,
        "description": article.meta.description,
        "datePublished": timestamps.published.map(|t| t.to_rfc3339()),
        "dateModified": timestamps.modified.or(timestamps.published).map(|t| t.to_rfc3339()),
        "author": {
            "@type": "Organization",
            "name": article.meta.author.as_deref().unwrap_or(&identity.site_name),
        },
        "publisher": {
            "@type": "Organization",
            "name": identity.site_name,
        },
        "mainEntityOfPage": identity.absolute(canonical),
    })
}

/// Display one article.
#[instrument(skip(state, token))]
pub async fn show(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
    Path(slug): Path<String>,
) -> Response {
    let signed_in = token.is_some();
    let Some(article) = state.content().article(&slug) else {
        return not_found_page(&state, signed_in);
    };

    let canonical = format!("/resources/{}", article.slug);
    let mut meta = PageMetadata::new()
        .title(article.meta.title.clone())
        .keywords(article.meta.tags.clone())
        .canonical(canonical.clone())
        .article(article.timestamps())
        .structured_data(article_schema(&state, article, &canonical));
    if let Some(description) = &article.meta.description {
        meta = meta.description(description.clone());
    }
    if let Some(author) = &article.meta.author {
        meta = meta.author(author.clone());
    }
    if let Some(image) = &article.meta.image {
        meta = meta.og_image(image.clone());
    }

    ResourceShowTemplate {
        head: state.head().sync(&meta),
        signed_in,
        article: ArticleView::from(article),
        related: state
            .content()
            .recent(RELATED_COUNT, Some(&article.slug))
            .into_iter()
            .map(ArticleView::from)
            .collect(),
    }
    .into_response()
}
