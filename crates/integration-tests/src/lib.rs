//! End-to-end test harness for the AutoRent Tours site.
//!
//! Each [`TestApp`] serves the full router on an ephemeral port with
//! in-memory services, so tests need no external service layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p autorent-integration-tests
//! ```
//!
//! Credential POSTs are rate limited per client IP with a burst of five.
//! Every `TestApp` has its own limiter; tests that sign in more often should
//! spawn a fresh app.

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, redirect};
use secrecy::SecretString;
use url::Url;

use autorent_site::build_app;
use autorent_site::config::{DEFAULT_SITE_NAME, ServiceConfig, SiteConfig};
use autorent_site::content::ContentStore;
use autorent_site::services::{
    DEMO_ADMIN, DEMO_CUSTOMER, DEMO_STAFF, InMemoryBookingDirectory, InMemorySessionOracle,
    Services,
};
use autorent_site::state::AppState;

/// A running site and a cookie-keeping client that does not follow redirects.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    /// The oracle behind the site, for counting session lookups.
    pub oracle: Arc<InMemorySessionOracle>,
}

impl TestApp {
    /// Serve the site with the demo accounts and sample bookings.
    pub async fn spawn() -> Self {
        Self::spawn_with(InMemorySessionOracle::with_demo_accounts(), Duration::from_secs(3)).await
    }

    /// Serve the site with a custom oracle and session lookup timeout.
    pub async fn spawn_with(oracle: InMemorySessionOracle, lookup_timeout: Duration) -> Self {
        let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let config = SiteConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: Url::parse(&format!("http://{addr}")).expect("Invalid base URL"),
            site_name: DEFAULT_SITE_NAME.to_string(),
            session_secret: SecretString::from("integration-secret-Qm7vTz2Lp9Xc4Rb8Nw1Hk6Jd".to_string()),
            content_dir: site_dir.join("content"),
            static_dir: site_dir.join("static"),
            service: ServiceConfig {
                lookup_timeout,
                ..ServiceConfig::default()
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
        };

        let content = ContentStore::load(&config.content_dir).expect("Failed to load content");
        let oracle = Arc::new(oracle);
        let services = Services {
            oracle: oracle.clone(),
            bookings: Arc::new(InMemoryBookingDirectory::with_sample_bookings()),
        };
        let app = build_app(AppState::new(config, services, content));

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            addr,
            client,
            oracle,
        }
    }

    /// Absolute URL for a path on this app.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Sign in with a phone number and password.
    pub async fn login(&self, (phone, password): (&str, &str)) -> Response {
        self.post_form("/login", &[("phone", phone), ("password", password)])
            .await
    }

    pub async fn login_customer(&self) -> Response {
        self.login(DEMO_CUSTOMER).await
    }

    pub async fn login_staff(&self) -> Response {
        self.login(DEMO_STAFF).await
    }

    pub async fn login_admin(&self) -> Response {
        self.login(DEMO_ADMIN).await
    }
}

/// `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// Response body as text.
pub async fn body(response: Response) -> String {
    response.text().await.expect("Failed to read body")
}

/// Content of `<meta name|property="key" content="...">` in a page, if present.
#[must_use]
pub fn meta_content<'a>(html: &'a str, key: &str) -> Option<&'a str> {
    ["name", "property"].iter().find_map(|attr| {
        let needle = format!("<meta {attr}=\"{key}\" content=\"");
        let start = html.find(&needle)? + needle.len();
        let end = html.get(start..)?.find('"')?;
        html.get(start..start + end)
    })
}

/// Text between `<title>` and `</title>`.
#[must_use]
pub fn page_title(html: &str) -> Option<&str> {
    let start = html.find("<title>")? + "<title>".len();
    let end = html.get(start..)?.find("</title>")?;
    html.get(start..start + end)
}
