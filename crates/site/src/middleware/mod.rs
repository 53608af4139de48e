//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (tag span and Sentry scope)
//! 4. Security headers
//! 5. Session layer (signed cookie, in-memory store)
//! 6. Access guard on `/customer/*` and `/admin/*`
//! 7. Rate limiting on credential POSTs

pub mod auth;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{
    OptionalToken, SignedInUser, access_token, clear_session, set_access_token,
};
pub use rate_limit::auth_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
