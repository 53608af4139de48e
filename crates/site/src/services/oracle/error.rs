//! Session oracle error types.

use thiserror::Error;

/// Errors talking to the session oracle.
///
/// A rejected login is not an error; it is reported through
/// [`LoginOutcome::error`](super::LoginOutcome).
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be built.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The service answered with a status this client does not handle.
    #[error("unexpected status {0} from session oracle")]
    UnexpectedStatus(u16),

    /// The service answered with a body this client could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
