//! The access guard as axum middleware.
//!
//! Wraps the `/customer/*` and `/admin/*` routers. Each guarded request asks
//! the session oracle once, bounded by the configured lookup timeout, and the
//! rule table in [`rules`](super::rules) decides what happens next.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use super::rules::{GuardDecision, GuardPolicy, SessionLookup, evaluate};
use crate::error::set_sentry_user;
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::access_token;
use crate::models::session_keys;
use crate::state::AppState;

/// Consecutive timed-out lookups after which the guard gives up and sends
/// the visitor to the login page.
pub const MAX_UNRESOLVED_LOOKUPS: u32 = 3;

/// Seconds before the loading page asks again.
const LOADING_REFRESH_SECONDS: u32 = 2;

/// Placeholder shown while the session lookup is unresolved.
#[derive(Template, WebTemplate)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub retry_seconds: u32,
}

/// Guard for the customer area.
pub async fn require_customer_area(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    guard(GuardPolicy::CUSTOMER, &state, &session, request, next).await
}

/// Guard for the admin area.
pub async fn require_admin_area(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    guard(GuardPolicy::ADMIN, &state, &session, request, next).await
}

async fn guard(
    policy: GuardPolicy,
    state: &AppState,
    session: &Session,
    mut request: Request,
    next: Next,
) -> Response {
    let lookup = lookup_session(state, session).await;
    let decision = evaluate(&lookup, policy);
    tracing::debug!(
        path = %request.uri().path(),
        ?policy,
        ?decision,
        "Access guard decision"
    );

    match decision {
        GuardDecision::Loading => loading_response(state),
        GuardDecision::RedirectTo(path) => Redirect::to(path).into_response(),
        GuardDecision::Allow => {
            if let SessionLookup::Resolved(Some(user)) = lookup {
                set_sentry_user(&user.id);
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
    }
}

/// Ask the oracle who holds this session.
///
/// No token means no identity without a round trip. A lookup that exceeds
/// the timeout is `Pending` until it has happened too often in a row.
async fn lookup_session(state: &AppState, session: &Session) -> SessionLookup {
    let Some(token) = access_token(session).await else {
        return SessionLookup::Resolved(None);
    };

    let timeout = state.config().service.lookup_timeout;
    match tokio::time::timeout(timeout, state.oracle().current_user(&token)).await {
        Ok(Ok(user)) => {
            reset_unresolved(session).await;
            if user.is_none() {
                // Expired or revoked; stop treating the visitor as signed in.
                if let Err(e) = session.remove::<String>(session_keys::ACCESS_TOKEN).await {
                    tracing::warn!(error = %e, "Failed to drop stale access token");
                }
            }
            SessionLookup::Resolved(user)
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Session lookup failed, treating as signed out");
            reset_unresolved(session).await;
            SessionLookup::Failed
        }
        Err(_) => record_unresolved(session).await,
    }
}

async fn record_unresolved(session: &Session) -> SessionLookup {
    let previous = session
        .get::<u32>(session_keys::UNRESOLVED_LOOKUPS)
        .await
        .ok()
        .flatten()
        .unwrap_or(0);
    let count = previous.saturating_add(1);

    if count >= MAX_UNRESOLVED_LOOKUPS {
        tracing::warn!(attempts = count, "Session lookup kept timing out, failing closed");
        reset_unresolved(session).await;
        return SessionLookup::Failed;
    }

    match session.insert(session_keys::UNRESOLVED_LOOKUPS, count).await {
        Ok(()) => {
            tracing::info!(attempts = count, "Session lookup timed out");
            SessionLookup::Pending
        }
        Err(e) => {
            // Without the counter the loading page could loop forever.
            tracing::warn!(error = %e, "Failed to record unresolved lookup");
            SessionLookup::Failed
        }
    }
}

async fn reset_unresolved(session: &Session) {
    if let Err(e) = session
        .remove::<u32>(session_keys::UNRESOLVED_LOOKUPS)
        .await
    {
        tracing::warn!(error = %e, "Failed to reset unresolved lookup counter");
    }
}

fn loading_response(state: &AppState) -> Response {
    let meta = PageMetadata::new().title("Checking your session").no_index();
    let template = LoadingTemplate {
        head: state.head().sync(&meta),
        signed_in: false,
        retry_seconds: LOADING_REFRESH_SECONDS,
    };

    let mut response = template.into_response();
    response.headers_mut().insert(
        HeaderName::from_static("refresh"),
        HeaderValue::from(LOADING_REFRESH_SECONDS),
    );
    response
}
