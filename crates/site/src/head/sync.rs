//! The process-wide head synchronizer.

use std::sync::{Mutex, MutexGuard, PoisonError};

use url::Url;

use super::metadata::{OgType, PageMetadata};
use super::state::{HeadKey, HeadState, plan};

/// Default document title, used when a page sets none.
pub const DEFAULT_TITLE: &str = "AutoRent Tours - Car Rental & Guided Tours";

/// Default share image, relative to the base URL.
pub const DEFAULT_IMAGE: &str = "/static/images/og-default.svg";

/// Site-wide values every head is composed from.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub site_name: String,
    pub default_title: String,
    pub base_url: Url,
    pub default_image: String,
}

impl SiteIdentity {
    #[must_use]
    pub fn new(site_name: impl Into<String>, base_url: Url) -> Self {
        Self {
            site_name: site_name.into(),
            default_title: DEFAULT_TITLE.to_string(),
            base_url,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    /// Resolve a possibly relative URL against the base URL.
    ///
    /// Input that cannot be joined is returned unchanged.
    #[must_use]
    pub fn absolute(&self, url: &str) -> String {
        self.base_url
            .join(url)
            .map_or_else(|_| url.to_string(), String::from)
    }

    /// `"<title> | <site name>"`, or the default title.
    #[must_use]
    pub fn compose_title(&self, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("{title} | {}", self.site_name),
            None => self.default_title.clone(),
        }
    }

    /// The head a page with `meta` should end up with.
    #[must_use]
    pub fn desired_head(&self, meta: &PageMetadata) -> HeadState {
        let title = self.compose_title(meta.title.as_deref());
        let image = self.absolute(meta.og_image.as_deref().unwrap_or(&self.default_image));
        let canonical = meta.canonical.as_deref().map(|url| self.absolute(url));

        let mut head = HeadState::new(title.clone(), meta.lang.clone());
        head.set(HeadKey::name("description"), meta.description.clone());
        if !meta.keywords.is_empty() {
            head.set(HeadKey::name("keywords"), meta.keywords.join(", "));
        }
        head.set(HeadKey::name("author"), meta.author.clone());
        head.set(HeadKey::name("robots"), meta.robots.clone());

        head.set(HeadKey::property("og:title"), title.clone());
        head.set(HeadKey::property("og:description"), meta.description.clone());
        head.set(HeadKey::property("og:image"), image.clone());
        head.set(HeadKey::property("og:type"), meta.og_type.as_str());
        head.set(HeadKey::property("og:site_name"), self.site_name.clone());
        if let Some(canonical) = &canonical {
            head.set(HeadKey::property("og:url"), canonical.clone());
        }

        if meta.og_type == OgType::Article
            && let Some(article) = meta.article
        {
            if let Some(published) = article.published {
                head.set(
                    HeadKey::property("article:published_time"),
                    published.to_rfc3339(),
                );
            }
            if let Some(modified) = article.modified {
                head.set(
                    HeadKey::property("article:modified_time"),
                    modified.to_rfc3339(),
                );
            }
        }

        head.set(HeadKey::name("twitter:card"), meta.twitter_card.as_str());
        head.set(HeadKey::name("twitter:title"), title);
        head.set(HeadKey::name("twitter:description"), meta.description.clone());
        head.set(HeadKey::name("twitter:image"), image);

        if let Some(canonical) = canonical {
            head.set(HeadKey::Canonical, canonical);
        }
        if let Some(data) = &meta.structured_data {
            head.set(HeadKey::StructuredData, script_safe_json(data));
        }
        head
    }
}

/// Serialize JSON for embedding in a `<script>` element.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// A `<meta>` element ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    /// `name` or `property`.
    pub attribute: &'static str,
    pub key: String,
    pub content: String,
}

/// The head as it stands after one synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadSnapshot {
    pub title: String,
    pub lang: String,
    pub metas: Vec<MetaTag>,
    pub canonical: Option<String>,
    /// Serialized JSON-LD, already safe inside `<script>`.
    pub structured_data: Option<String>,
}

impl From<&HeadState> for HeadSnapshot {
    fn from(state: &HeadState) -> Self {
        let mut snapshot = Self {
            title: state.title().to_string(),
            lang: state.lang().to_string(),
            metas: Vec::new(),
            canonical: None,
            structured_data: None,
        };
        for (key, value) in state.entries() {
            match key {
                HeadKey::Meta { attr, key } => snapshot.metas.push(MetaTag {
                    attribute: attr.as_str(),
                    key: key.clone(),
                    content: value.to_string(),
                }),
                HeadKey::Canonical => snapshot.canonical = Some(value.to_string()),
                HeadKey::StructuredData => snapshot.structured_data = Some(value.to_string()),
            }
        }
        snapshot
    }
}

impl HeadSnapshot {
    /// Content of the meta tag with the given key, if present.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}

/// Owns the shared head state and reconciles it with each rendered view.
///
/// Every call plans and applies its whole diff under one lock, so the
/// returned snapshot never mixes two views' metadata. Last writer wins.
#[derive(Debug)]
pub struct HeadSynchronizer {
    identity: SiteIdentity,
    state: Mutex<HeadState>,
}

impl HeadSynchronizer {
    /// Create a synchronizer with the default metadata applied.
    #[must_use]
    pub fn new(identity: SiteIdentity) -> Self {
        let initial = identity.desired_head(&PageMetadata::default());
        Self {
            identity,
            state: Mutex::new(initial),
        }
    }

    #[must_use]
    pub const fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    /// Reconcile the head with `meta` and return the result.
    pub fn sync(&self, meta: &PageMetadata) -> HeadSnapshot {
        let desired = self.identity.desired_head(meta);
        let mut state = self.lock();
        let mutations = plan(&state, &desired);
        let count = mutations.len();
        state.apply(mutations);
        tracing::trace!(mutations = count, title = %state.title(), "Synchronized head");
        HeadSnapshot::from(&*state)
    }

    /// The head as last applied.
    pub fn snapshot(&self) -> HeadSnapshot {
        HeadSnapshot::from(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, HeadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::super::metadata::ArticleTimestamps;
    use super::*;

    fn synchronizer() -> HeadSynchronizer {
        let base = Url::parse("https://autorent.tours").unwrap();
        HeadSynchronizer::new(SiteIdentity::new("AutoRent Tours", base))
    }

    fn count(snapshot: &HeadSnapshot, key: &str) -> usize {
        snapshot.metas.iter().filter(|m| m.key == key).count()
    }

    #[test]
    fn test_initial_state_uses_default_title() {
        let sync = synchronizer();
        assert_eq!(sync.snapshot().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_custom_title_is_composed() {
        let sync = synchronizer();
        let head = sync.sync(&PageMetadata::new().title("Pricing"));
        assert_eq!(head.title, "Pricing | AutoRent Tours");
        assert_eq!(head.meta("og:title"), Some("Pricing | AutoRent Tours"));
    }

    #[test]
    fn test_second_title_wins() {
        let sync = synchronizer();
        sync.sync(&PageMetadata::new().title("Features"));
        let head = sync.sync(&PageMetadata::new().title("Pricing"));
        assert_eq!(head.title, "Pricing | AutoRent Tours");
        assert_eq!(count(&head, "og:title"), 1);
        assert_eq!(count(&head, "twitter:title"), 1);
    }

    #[test]
    fn test_structured_data_removed_when_absent() {
        let sync = synchronizer();
        let with = sync.sync(
            &PageMetadata::new().structured_data(serde_json::json!({"@type": "Organization"})),
        );
        assert!(with.structured_data.is_some());

        let without = sync.sync(&PageMetadata::new());
        assert!(without.structured_data.is_none());
        assert!(sync.snapshot().structured_data.is_none());
    }

    #[test]
    fn test_no_duplicate_meta_tags_across_syncs() {
        let sync = synchronizer();
        for title in ["A", "B", "C"] {
            sync.sync(&PageMetadata::new().title(title).keywords(["cars", "tours"]));
        }
        let head = sync.snapshot();
        let mut keys: Vec<_> = head.metas.iter().map(|m| m.key.as_str()).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_keywords_only_when_non_empty() {
        let sync = synchronizer();
        let head = sync.sync(&PageMetadata::new().keywords(["rental"]));
        assert_eq!(head.meta("keywords"), Some("rental"));
        let head = sync.sync(&PageMetadata::new());
        assert_eq!(head.meta("keywords"), None);
    }

    #[test]
    fn test_article_timestamps_cleared_on_next_page() {
        let sync = synchronizer();
        let published = Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap();
        let head = sync.sync(&PageMetadata::new().article(ArticleTimestamps {
            published: Some(published),
            modified: None,
        }));
        assert_eq!(head.meta("og:type"), Some("article"));
        assert_eq!(
            head.meta("article:published_time"),
            Some("2026-04-01T08:00:00+00:00")
        );
        assert_eq!(head.meta("article:modified_time"), None);

        let head = sync.sync(&PageMetadata::new());
        assert_eq!(head.meta("og:type"), Some("website"));
        assert_eq!(head.meta("article:published_time"), None);
    }

    #[test]
    fn test_timestamps_ignored_for_website_type() {
        let sync = synchronizer();
        let mut meta = PageMetadata::new();
        meta.article = Some(ArticleTimestamps {
            published: Some(Utc::now()),
            modified: Some(Utc::now()),
        });
        let head = sync.sync(&meta);
        assert_eq!(head.meta("article:published_time"), None);
    }

    #[test]
    fn test_canonical_and_image_made_absolute() {
        let sync = synchronizer();
        let head = sync.sync(&PageMetadata::new().canonical("/pricing"));
        assert_eq!(head.canonical.as_deref(), Some("https://autorent.tours/pricing"));
        assert_eq!(head.meta("og:url"), Some("https://autorent.tours/pricing"));
        assert_eq!(
            head.meta("og:image"),
            Some("https://autorent.tours/static/images/og-default.svg")
        );

        let head = sync.sync(&PageMetadata::new());
        assert!(head.canonical.is_none());
        assert_eq!(head.meta("og:url"), None);
    }

    #[test]
    fn test_lang_overwritten() {
        let sync = synchronizer();
        assert_eq!(sync.sync(&PageMetadata::new().lang("de")).lang, "de");
        assert_eq!(sync.sync(&PageMetadata::new()).lang, "en");
    }

    #[test]
    fn test_structured_data_escapes_script_close() {
        let sync = synchronizer();
        let head = sync.sync(
            &PageMetadata::new().structured_data(serde_json::json!({"name": "</script>"})),
        );
        let json = head.structured_data.unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }
}
