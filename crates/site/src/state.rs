//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::head::{HeadSynchronizer, SiteIdentity};
use crate::services::{BookingDirectory, Services, SessionOracle};

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    oracle: Arc<dyn SessionOracle>,
    bookings: Arc<dyn BookingDirectory>,
    head: HeadSynchronizer,
    content: ContentStore,
}

impl AppState {
    /// Create the application state.
    ///
    /// The head synchronizer starts out with the default metadata applied.
    #[must_use]
    pub fn new(config: SiteConfig, services: Services, content: ContentStore) -> Self {
        let identity = SiteIdentity::new(config.site_name.clone(), config.base_url.clone());
        Self {
            inner: Arc::new(AppStateInner {
                head: HeadSynchronizer::new(identity),
                oracle: services.oracle,
                bookings: services.bookings,
                content,
                config,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// The session oracle.
    #[must_use]
    pub fn oracle(&self) -> &dyn SessionOracle {
        self.inner.oracle.as_ref()
    }

    /// The booking directory.
    #[must_use]
    pub fn bookings(&self) -> &dyn BookingDirectory {
        self.inner.bookings.as_ref()
    }

    /// The head synchronizer.
    #[must_use]
    pub fn head(&self) -> &HeadSynchronizer {
        &self.inner.head
    }

    /// Markdown content loaded at startup.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
