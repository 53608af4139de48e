//! Session oracle: the external authority on who is logged in.
//!
//! The site never verifies credentials or stores users itself. It forwards
//! logins to the oracle, keeps the returned [`AccessToken`] in the cookie
//! session, and asks the oracle to resolve that token on every guarded
//! request.

mod error;
mod http;
mod memory;

pub use error::OracleError;
pub use http::HttpSessionOracle;
pub use memory::{DEMO_ADMIN, DEMO_CUSTOMER, DEMO_STAFF, InMemorySessionOracle};

use async_trait::async_trait;
use secrecy::SecretString;

use autorent_core::{Email, PhoneNumber};

use crate::models::{AccessToken, User};

/// Resolves and manages authenticated sessions.
#[async_trait]
pub trait SessionOracle: Send + Sync {
    /// Resolve the identity behind a token.
    ///
    /// Returns `Ok(None)` for unknown, expired or revoked tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle could not be reached or answered
    /// with something unexpected.
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, OracleError>;

    /// Exchange a phone number and password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; wrong credentials are
    /// reported through [`LoginOutcome::error`].
    async fn login_with_phone(
        &self,
        phone: &PhoneNumber,
        password: &SecretString,
    ) -> Result<LoginOutcome, OracleError>;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; rejected registrations
    /// are reported through [`LoginOutcome::error`].
    async fn register_with_phone(
        &self,
        registration: &Registration,
    ) -> Result<LoginOutcome, OracleError>;

    /// Revoke a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle could not be reached.
    async fn logout(&self, token: &AccessToken) -> Result<(), OracleError>;

    /// Whether the oracle is reachable, for the readiness check.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Whether a user belongs in the back office.
///
/// Pure function of the role: true for `admin` and `staff`.
#[must_use]
pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(|user| user.role.is_back_office())
}

/// Result of a login or registration attempt.
#[derive(Debug, Clone, Default)]
pub struct LoginOutcome {
    pub user: Option<User>,
    pub token: Option<AccessToken>,
    /// Message to show on the form when the attempt was rejected.
    pub error: Option<String>,
}

impl LoginOutcome {
    #[must_use]
    pub const fn success(user: User, token: AccessToken) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            user: None,
            token: None,
            error: Some(message.into()),
        }
    }

    /// Split into the signed-in session or the message to display.
    ///
    /// # Errors
    ///
    /// Returns the rejection message when no session was issued.
    pub fn into_session(self) -> Result<(User, AccessToken), String> {
        match (self.user, self.token) {
            (Some(user), Some(token)) => Ok((user, token)),
            _ => Err(self
                .error
                .unwrap_or_else(|| "Sign in failed. Please try again.".to_string())),
        }
    }
}

/// A validated registration form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub password: SecretString,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use autorent_core::{Role, UserId};

    use super::*;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(7),
            full_name: "Test User".to_string(),
            email: Email::parse("test@autorent.tours").unwrap(),
            phone_number: PhoneNumber::parse("+15550000007").unwrap(),
            role,
        }
    }

    #[test]
    fn test_is_admin_by_role() {
        assert!(!is_admin(None));
        assert!(!is_admin(Some(&user(Role::Guest))));
        assert!(!is_admin(Some(&user(Role::Customer))));
        assert!(is_admin(Some(&user(Role::Staff))));
        assert!(is_admin(Some(&user(Role::Admin))));
    }

    #[test]
    fn test_into_session_success() {
        let outcome = LoginOutcome::success(user(Role::Customer), AccessToken::new("tok"));
        let (user, token) = outcome.into_session().unwrap();
        assert_eq!(user.role, Role::Customer);
        assert_eq!(token.expose(), "tok");
    }

    #[test]
    fn test_into_session_rejected_keeps_message() {
        let outcome = LoginOutcome::rejected("Invalid phone number or password");
        assert_eq!(
            outcome.into_session().unwrap_err(),
            "Invalid phone number or password"
        );
    }

    #[test]
    fn test_into_session_without_message_has_fallback() {
        assert!(!LoginOutcome::default().into_session().unwrap_err().is_empty());
    }
}
