//! Markdown content for the resources section.
//!
//! Articles live in `<content_dir>/resources/*.md` with YAML front matter.
//! They are loaded and rendered once at startup.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, NaiveDate, Utc};
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use regex::Regex;
use serde::Deserialize;

use crate::head::ArticleTimestamps;

/// Front matter of a resources article.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

/// A rendered article.
#[derive(Debug, Clone)]
pub struct Article {
    pub slug: String,
    pub meta: ArticleMeta,
    pub content_html: String,
    pub reading_time_minutes: u32,
}

impl Article {
    /// Publication times for the Open Graph article tags.
    #[must_use]
    pub fn timestamps(&self) -> ArticleTimestamps {
        ArticleTimestamps {
            published: Some(midnight_utc(self.meta.published_at)),
            modified: self.meta.updated_at.map(midnight_utc),
        }
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// All articles, newest first.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    articles: Arc<Vec<Article>>,
}

/// `YYYY-MM-DD-` file name prefix.
static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("Invalid regex"));

impl ContentStore {
    /// Load all articles from the content directory.
    ///
    /// A missing `resources` directory yields an empty store. Files that fail
    /// to parse are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the resources directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("resources");
        let mut articles = Vec::new();

        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "Resources directory does not exist");
            return Ok(Self::default());
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match load_article(&path) {
                    Ok(article) => {
                        tracing::info!(slug = %article.slug, "Loaded article");
                        articles.push(article);
                    }
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "Failed to load article");
                    }
                }
            }
        }

        articles.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));

        Ok(Self {
            articles: Arc::new(articles),
        })
    }

    /// A store over already-built articles.
    #[must_use]
    pub fn from_articles(mut articles: Vec<Article>) -> Self {
        articles.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));
        Self {
            articles: Arc::new(articles),
        }
    }

    /// A published article by slug.
    #[must_use]
    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.published().find(|a| a.slug == slug)
    }

    /// Published articles, newest first.
    pub fn published(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| !a.meta.draft)
    }

    /// Recent published articles, optionally excluding one slug.
    #[must_use]
    pub fn recent(&self, limit: usize, exclude_slug: Option<&str>) -> Vec<&Article> {
        self.published()
            .filter(|a| exclude_slug.is_none_or(|s| a.slug != s))
            .take(limit)
            .collect()
    }
}

fn load_article(path: &Path) -> Result<Article, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
    let filename = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;
    parse_article(&slug_from_filename(filename), &raw)
}

/// Strip a leading date from a file stem.
fn slug_from_filename(filename: &str) -> String {
    DATE_PREFIX_RE.replace(filename, "").into_owned()
}

/// Parse front matter and render the markdown body.
///
/// # Errors
///
/// Returns an error if the front matter is missing or malformed.
pub fn parse_article(slug: &str, raw: &str) -> Result<Article, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<ArticleMeta> = matter
        .parse(raw)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

    let word_count = parsed.content.split_whitespace().count();
    let reading_time_minutes = u32::try_from(word_count.div_ceil(200)).unwrap_or(u32::MAX);

    Ok(Article {
        slug: slug.to_string(),
        meta,
        content_html: render_markdown(&parsed.content),
        reading_time_minutes: reading_time_minutes.max(1),
    })
}

/// Render markdown to HTML with GitHub Flavored Markdown extensions.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\n\
title: Driving the coast road\n\
description: What to expect on the cliffs\n\
published_at: 2026-05-02\n\
updated_at: 2026-06-10\n\
tags: [tours, driving]\n\
---\n\
\n\
## Before you go\n\
\n\
Fill up in town. There is **no fuel** for 80 km.\n";

    #[test]
    fn test_slug_strips_date_prefix() {
        assert_eq!(slug_from_filename("2026-05-02-coast-road"), "coast-road");
        assert_eq!(slug_from_filename("coast-road"), "coast-road");
        assert_eq!(slug_from_filename("2026-coast"), "2026-coast");
    }

    #[test]
    fn test_parse_article() {
        let article = parse_article("coast-road", SAMPLE).unwrap();
        assert_eq!(article.meta.title, "Driving the coast road");
        assert_eq!(article.meta.tags, vec!["tours", "driving"]);
        assert!(article.content_html.contains("<strong>no fuel</strong>"));
        assert!(article.content_html.contains("<h2"));
        assert_eq!(article.reading_time_minutes, 1);
    }

    #[test]
    fn test_timestamps_from_front_matter() {
        let article = parse_article("coast-road", SAMPLE).unwrap();
        let ts = article.timestamps();
        assert_eq!(
            ts.published.unwrap().to_rfc3339(),
            "2026-05-02T00:00:00+00:00"
        );
        assert!(ts.modified.is_some());
    }

    #[test]
    fn test_missing_front_matter_is_error() {
        assert!(parse_article("x", "# Just markdown").is_err());
    }

    #[test]
    fn test_drafts_hidden() {
        let mut draft = parse_article("draft", SAMPLE).unwrap();
        draft.meta.draft = true;
        let live = parse_article("live", SAMPLE).unwrap();
        let store = ContentStore::from_articles(vec![draft, live]);
        assert!(store.article("draft").is_none());
        assert!(store.article("live").is_some());
        assert_eq!(store.recent(5, Some("live")).len(), 0);
    }

    #[test]
    fn test_loads_crate_content() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(&dir).unwrap();
        assert!(store.published().count() >= 2);
    }
}
