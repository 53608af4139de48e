//! Session oracle backed by the external service's HTTP API.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use autorent_core::PhoneNumber;

use super::{LoginOutcome, OracleError, Registration, SessionOracle};
use crate::models::{AccessToken, User};
use crate::services::ServiceEndpoint;

/// HTTP client for the `/auth/*` endpoints.
#[derive(Clone)]
pub struct HttpSessionOracle {
    endpoint: ServiceEndpoint,
}

/// Body of a successful login or registration.
#[derive(Debug, Deserialize)]
struct SessionGrant {
    user: User,
    token: AccessToken,
}

/// Body of a rejected login or registration.
#[derive(Debug, Deserialize)]
struct Rejection {
    error: String,
}

impl HttpSessionOracle {
    #[must_use]
    pub const fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }

    /// POST a credential body and map the answer to a [`LoginOutcome`].
    async fn exchange(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<LoginOutcome, OracleError> {
        let url = self.endpoint.url(path)?;
        let response = self
            .endpoint
            .request(Method::POST, url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        match status {
            s if s.is_success() => {
                let grant: SessionGrant = decode(&text)?;
                Ok(LoginOutcome::success(grant.user, grant.token))
            }
            StatusCode::UNAUTHORIZED
            | StatusCode::BAD_REQUEST
            | StatusCode::CONFLICT
            | StatusCode::UNPROCESSABLE_ENTITY => {
                let rejection: Rejection = decode(&text)?;
                Ok(LoginOutcome::rejected(rejection.error))
            }
            other => {
                tracing::error!(
                    status = %other,
                    body = %text.chars().take(200).collect::<String>(),
                    "Session oracle returned unexpected status"
                );
                Err(OracleError::UnexpectedStatus(other.as_u16()))
            }
        }
    }
}

/// Parse a JSON body, logging a prefix of it on failure.
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, OracleError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(200).collect::<String>(),
            "Failed to parse session oracle response"
        );
        OracleError::InvalidResponse(e.to_string())
    })
}

#[async_trait]
impl SessionOracle for HttpSessionOracle {
    #[instrument(skip_all)]
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, OracleError> {
        let url = self.endpoint.url("auth/me")?;
        let response = self
            .endpoint
            .request(Method::GET, url)
            .bearer_auth(token.expose())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let text = response.text().await?;
                decode(&text).map(Some)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            other => Err(OracleError::UnexpectedStatus(other.as_u16())),
        }
    }

    #[instrument(skip(self, password), fields(phone = %phone.last_four()))]
    async fn login_with_phone(
        &self,
        phone: &PhoneNumber,
        password: &SecretString,
    ) -> Result<LoginOutcome, OracleError> {
        let body = serde_json::json!({
            "phone": phone.as_str(),
            "password": password.expose_secret(),
        });
        self.exchange("auth/login", &body).await
    }

    #[instrument(skip_all, fields(phone = %registration.phone.last_four()))]
    async fn register_with_phone(
        &self,
        registration: &Registration,
    ) -> Result<LoginOutcome, OracleError> {
        let body = serde_json::json!({
            "full_name": registration.full_name,
            "email": registration.email,
            "phone": registration.phone.as_str(),
            "password": registration.password.expose_secret(),
        });
        self.exchange("auth/register", &body).await
    }

    #[instrument(skip_all)]
    async fn logout(&self, token: &AccessToken) -> Result<(), OracleError> {
        let url = self.endpoint.url("auth/logout")?;
        let response = self
            .endpoint
            .request(Method::POST, url)
            .bearer_auth(token.expose())
            .send()
            .await?;

        let status = response.status();
        // An already revoked token is as good as a logout.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            Err(OracleError::UnexpectedStatus(status.as_u16()))
        }
    }

    async fn is_available(&self) -> bool {
        let Ok(url) = self.endpoint.url("health") else {
            return false;
        };
        match self.endpoint.request(Method::GET, url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Session oracle health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use autorent_core::Role;

    use super::*;

    #[test]
    fn test_decode_session_grant() {
        let json = r#"{
            "user": {
                "id": 101,
                "full_name": "Amara Okafor",
                "email": "amara@autorent.tours",
                "phone_number": "+15550102030",
                "role": "customer"
            },
            "token": "tok_123"
        }"#;
        let grant: SessionGrant = decode(json).unwrap();
        assert_eq!(grant.user.role, Role::Customer);
        assert_eq!(grant.token.expose(), "tok_123");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode::<Rejection>("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, OracleError::InvalidResponse(_)));
    }
}
