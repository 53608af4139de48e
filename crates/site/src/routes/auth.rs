//! Login, registration and logout.
//!
//! Credentials are forwarded to the session oracle; the site only keeps the
//! access token it hands back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use autorent_core::{Email, PhoneNumber};

use crate::error::{AppError, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::head::{HeadSnapshot, PageMetadata};
use crate::middleware::{OptionalToken, clear_session, set_access_token};
use crate::models::{AccessToken, User};
use crate::services::{LoginOutcome, Registration};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub error: Option<String>,
    pub phone: String,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub head: HeadSnapshot,
    pub signed_in: bool,
    pub error: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

fn login_meta() -> PageMetadata {
    PageMetadata::new()
        .title("Sign in")
        .description("Sign in to manage your AutoRent Tours bookings.")
        .canonical("/login")
}

fn register_meta() -> PageMetadata {
    PageMetadata::new()
        .title("Create an account")
        .description("Create an AutoRent Tours account to see all your bookings in one place.")
        .canonical("/register")
}

fn render_login(
    state: &AppState,
    status: StatusCode,
    error: Option<String>,
    phone: String,
) -> Response {
    let template = LoginTemplate {
        head: state.head().sync(&login_meta()),
        signed_in: false,
        error,
        phone,
    };
    (status, template).into_response()
}

fn render_register(
    state: &AppState,
    status: StatusCode,
    error: Option<String>,
    form: &RegisterForm,
) -> Response {
    let template = RegisterTemplate {
        head: state.head().sync(&register_meta()),
        signed_in: false,
        error,
        full_name: form.full_name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
    };
    (status, template).into_response()
}

/// Store the new session and send the user to their dashboard.
async fn start_session(session: &Session, user: &User, token: &AccessToken) -> Result<Response, AppError> {
    set_access_token(session, token).await?;
    set_sentry_user(&user.id);
    add_breadcrumb(
        "auth",
        "Signed in",
        Some(&[("role", user.role.label())]),
    );
    tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
    Ok(Redirect::to(user.home_path()).into_response())
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    LoginTemplate {
        head: state.head().sync(&login_meta()),
        signed_in: token.is_some(),
        error: None,
        phone: String::new(),
    }
}

/// Handle login form submission.
///
/// # Errors
///
/// Returns an error if the session oracle is unreachable or the session
/// cannot be written.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let Ok(phone) = PhoneNumber::parse(&form.phone) else {
        return Ok(render_login(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            Some("Please enter a valid phone number".to_string()),
            form.phone,
        ));
    };
    if form.password.is_empty() {
        return Ok(render_login(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            Some("Please enter your password".to_string()),
            form.phone,
        ));
    }

    let password = SecretString::from(form.password);
    let outcome: LoginOutcome = state.oracle().login_with_phone(&phone, &password).await?;

    match outcome.into_session() {
        Ok((user, token)) => start_session(&session, &user, &token).await,
        Err(message) => {
            tracing::warn!(phone = %phone.last_four(), "Login rejected");
            Ok(render_login(
                &state,
                StatusCode::UNAUTHORIZED,
                Some(message),
                form.phone,
            ))
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
#[instrument(skip_all)]
pub async fn register_page(
    State(state): State<AppState>,
    OptionalToken(token): OptionalToken,
) -> impl IntoResponse {
    RegisterTemplate {
        head: state.head().sync(&register_meta()),
        signed_in: token.is_some(),
        error: None,
        full_name: String::new(),
        email: String::new(),
        phone: String::new(),
    }
}

/// Check the registration form before it goes to the oracle.
fn validate_registration(form: &RegisterForm) -> Result<Registration, String> {
    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        return Err("Please enter your full name".to_string());
    }

    let email =
        Email::parse(&form.email).map_err(|_| "Please enter a valid email address".to_string())?;

    let phone =
        PhoneNumber::parse(&form.phone).map_err(|_| "Please enter a valid phone number".to_string())?;

    if form.password != form.password_confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(Registration {
        full_name: full_name.to_string(),
        email,
        phone,
        password: SecretString::from(form.password.clone()),
    })
}

/// Handle registration form submission.
///
/// # Errors
///
/// Returns an error if the session oracle is unreachable or the session
/// cannot be written.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let registration = match validate_registration(&form) {
        Ok(registration) => registration,
        Err(message) => {
            return Ok(render_register(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(message),
                &form,
            ));
        }
    };

    let outcome = state.oracle().register_with_phone(&registration).await?;
    match outcome.into_session() {
        Ok((user, token)) => start_session(&session, &user, &token).await,
        Err(message) => Ok(render_register(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(message),
            &form,
        )),
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Revoke the token and clear the session.
///
/// A failed revocation is logged; the local session is cleared regardless.
///
/// # Errors
///
/// Returns an error if the session cannot be flushed.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    OptionalToken(token): OptionalToken,
) -> Result<Response, AppError> {
    if let Some(token) = token
        && let Err(e) = state.oracle().logout(&token).await
    {
        tracing::warn!(error = %e, "Failed to revoke access token");
    }

    clear_session(&session).await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Signed out", None);

    Ok(Redirect::to("/").into_response())
}
