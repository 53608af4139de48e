//! Declarative page metadata.
//!
//! Each view builds one [`PageMetadata`] and hands it to the
//! [`HeadSynchronizer`](super::HeadSynchronizer); unset fields fall back to
//! site-wide defaults.

use chrono::{DateTime, Utc};

/// Fallback description for pages that do not set their own.
pub const DEFAULT_DESCRIPTION: &str = "Car rentals and guided tours with local drivers. \
     Book online and track any booking with its reference number.";

/// Fallback robots directive.
pub const DEFAULT_ROBOTS: &str = "index, follow";

/// Robots directive for pages that must stay out of search results.
pub const NO_INDEX: &str = "noindex, nofollow";

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Twitter card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
}

impl TwitterCard {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Publication times of an article page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleTimestamps {
    pub published: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Everything a view declares about its document head.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    /// Page title without the site name; `None` uses the default title.
    pub title: Option<String>,
    pub description: String,
    pub keywords: Vec<String>,
    /// Canonical URL, absolute or relative to the site base URL.
    pub canonical: Option<String>,
    /// Share image, absolute or relative; `None` uses the site default.
    pub og_image: Option<String>,
    pub og_type: OgType,
    pub article: Option<ArticleTimestamps>,
    pub twitter_card: TwitterCard,
    pub robots: String,
    /// JSON-LD document for a `<script type="application/ld+json">` block.
    pub structured_data: Option<serde_json::Value>,
    pub author: String,
    pub lang: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: None,
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: Vec::new(),
            canonical: None,
            og_image: None,
            og_type: OgType::Website,
            article: None,
            twitter_card: TwitterCard::SummaryLargeImage,
            robots: DEFAULT_ROBOTS.to_string(),
            structured_data: None,
            author: "AutoRent Tours".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl PageMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    #[must_use]
    pub fn og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    /// Mark the page as an article with the given timestamps.
    #[must_use]
    pub const fn article(mut self, timestamps: ArticleTimestamps) -> Self {
        self.og_type = OgType::Article;
        self.article = Some(timestamps);
        self
    }

    #[must_use]
    pub const fn twitter_card(mut self, card: TwitterCard) -> Self {
        self.twitter_card = card;
        self
    }

    #[must_use]
    pub fn robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = robots.into();
        self
    }

    /// Keep the page out of search indexes.
    #[must_use]
    pub fn no_index(self) -> Self {
        self.robots(NO_INDEX)
    }

    #[must_use]
    pub fn structured_data(mut self, data: serde_json::Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let meta = PageMetadata::new();
        assert!(meta.title.is_none());
        assert_eq!(meta.og_type, OgType::Website);
        assert_eq!(meta.robots, DEFAULT_ROBOTS);
        assert_eq!(meta.lang, "en");
    }

    #[test]
    fn test_article_sets_og_type() {
        let meta = PageMetadata::new().article(ArticleTimestamps::default());
        assert_eq!(meta.og_type, OgType::Article);
        assert!(meta.article.is_some());
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(OgType::Article.as_str(), "article");
        assert_eq!(TwitterCard::SummaryLargeImage.as_str(), "summary_large_image");
    }
}
