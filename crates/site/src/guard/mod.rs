//! Access guard for the account areas.
//!
//! [`rules`] holds the pure decision table; [`middleware`] binds it to
//! requests, the cookie session and the session oracle.

pub mod middleware;
pub mod rules;

pub use middleware::{MAX_UNRESOLVED_LOOKUPS, require_admin_area, require_customer_area};
pub use rules::{GuardDecision, GuardPolicy, RouteArea, SessionLookup, evaluate};
