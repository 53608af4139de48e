//! Clients for the external service layer.
//!
//! # Services
//!
//! - `oracle` - Session oracle: login, logout, current identity and role
//! - `bookings` - Booking directory: lookups by reference, customer or recency
//!
//! Each service is a trait with two implementations: an HTTP client for the
//! real service (selected when `SERVICE_BASE_URL` is set) and an in-memory
//! demo used for local development and tests.

pub mod bookings;
pub mod oracle;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::ServiceConfig;

pub use bookings::{BookingDirectory, BookingError, HttpBookingDirectory, InMemoryBookingDirectory};
pub use oracle::{
    DEMO_ADMIN, DEMO_CUSTOMER, DEMO_STAFF, HttpSessionOracle, InMemorySessionOracle, LoginOutcome, OracleError, Registration,
    SessionOracle, is_admin,
};

/// The external collaborators the site talks to.
#[derive(Clone)]
pub struct Services {
    pub oracle: Arc<dyn SessionOracle>,
    pub bookings: Arc<dyn BookingDirectory>,
}

impl Services {
    /// Build the service clients described by the configuration.
    ///
    /// Without a service URL the in-memory demo services are used.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        match &config.base_url {
            Some(base_url) => {
                tracing::info!(service = %base_url, "Using external service layer");
                let endpoint = ServiceEndpoint::new(base_url, config.api_token.clone());
                Self {
                    oracle: Arc::new(HttpSessionOracle::new(endpoint.clone())),
                    bookings: Arc::new(HttpBookingDirectory::new(endpoint)),
                }
            }
            None => {
                tracing::warn!("SERVICE_BASE_URL not set, using in-memory demo services");
                Self::demo()
            }
        }
    }

    /// In-memory services seeded with demo accounts and bookings.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            oracle: Arc::new(InMemorySessionOracle::with_demo_accounts()),
            bookings: Arc::new(InMemoryBookingDirectory::with_sample_bookings()),
        }
    }
}

/// Header carrying the site's own credential for the service layer.
const SERVICE_TOKEN_HEADER: &str = "X-Service-Token";

/// Shared HTTP plumbing for the service clients.
#[derive(Clone)]
pub struct ServiceEndpoint {
    inner: Arc<ServiceEndpointInner>,
}

struct ServiceEndpointInner {
    client: reqwest::Client,
    base_url: Url,
    api_token: Option<SecretString>,
}

impl ServiceEndpoint {
    /// Create an endpoint rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &Url, api_token: Option<SecretString>) -> Self {
        Self {
            inner: Arc::new(ServiceEndpointInner {
                client: reqwest::Client::new(),
                base_url: directory_url(base_url),
                api_token,
            }),
        }
    }

    /// Resolve a path relative to the service root.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL.
    pub fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.inner.base_url.join(path.trim_start_matches('/'))
    }

    /// Start a request, attaching the service token when configured.
    pub fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.inner.client.request(method, url);
        match &self.inner.api_token {
            Some(token) => builder.header(SERVICE_TOKEN_HEADER, token.expose_secret()),
            None => builder,
        }
    }
}

/// Ensure a base URL ends in `/` so `Url::join` appends instead of replacing
/// the last path segment.
pub(crate) fn directory_url(base_url: &Url) -> Url {
    let mut url = base_url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_url_appends_slash() {
        let base = Url::parse("https://api.autorent.tours/v1").unwrap();
        let joined = directory_url(&base).join("auth/me").unwrap();
        assert_eq!(joined.as_str(), "https://api.autorent.tours/v1/auth/me");
    }

    #[test]
    fn test_endpoint_url_ignores_leading_slash() {
        let base = Url::parse("http://127.0.0.1:9000/api").unwrap();
        let endpoint = ServiceEndpoint::new(&base, None);
        assert_eq!(
            endpoint.url("/bookings/AR-1").unwrap().as_str(),
            "http://127.0.0.1:9000/api/bookings/AR-1"
        );
    }

    #[test]
    fn test_directory_url_keeps_existing_slash() {
        let base = Url::parse("https://api.autorent.tours/").unwrap();
        assert_eq!(directory_url(&base).as_str(), "https://api.autorent.tours/");
    }
}
