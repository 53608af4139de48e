//! Authentication extractors and session helpers.
//!
//! The access guard resolves the user once per guarded request and leaves it
//! in the request extensions; handlers behind the guard pick it up with
//! [`SignedInUser`]. Public pages use [`OptionalToken`] to tell whether a
//! visitor holds a session at all without asking the oracle.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::user::LOGIN_PATH;
use crate::models::{AccessToken, User, session_keys};

/// Extractor for the user the access guard admitted.
///
/// Only valid on routes wrapped by the guard. Anywhere else it redirects to
/// the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(SignedInUser(user): SignedInUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.first_name())
/// }
/// ```
pub struct SignedInUser(pub User);

/// Rejection when no admitted user is attached to the request.
pub struct NotSignedIn;

impl IntoResponse for NotSignedIn {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

impl<S> FromRequestParts<S> for SignedInUser
where
    S: Send + Sync,
{
    type Rejection = NotSignedIn;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(Self)
            .ok_or(NotSignedIn)
    }
}

/// Extractor for the access token in the session, if any.
///
/// Does not validate the token.
pub struct OptionalToken(pub Option<AccessToken>);

impl<S> FromRequestParts<S> for OptionalToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = match parts.extensions.get::<Session>() {
            Some(session) => access_token(session).await,
            None => None,
        };
        Ok(Self(token))
    }
}

/// Read the access token from the session.
///
/// A session that cannot be read counts as having no token.
pub async fn access_token(session: &Session) -> Option<AccessToken> {
    session
        .get::<AccessToken>(session_keys::ACCESS_TOKEN)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to read session token"))
        .ok()
        .flatten()
}

/// Store a fresh access token after login.
///
/// Cycles the session ID to prevent fixation and resets the unresolved
/// lookup counter.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_access_token(
    session: &Session,
    token: &AccessToken,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::ACCESS_TOKEN, token).await?;
    session
        .remove::<u32>(session_keys::UNRESOLVED_LOOKUPS)
        .await?;
    Ok(())
}

/// Drop everything in the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be flushed.
pub async fn clear_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
