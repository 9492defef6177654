//! # Authentication Endpoints
//!
//! Issues login and registration requests against the backend REST API.
//!
//! Every failure — transport fault, non-2xx status, unparsable body — is
//! converted into an [`AuthFailure`] with a message fit for inline display.
//! Nothing here panics into the form; one attempt per call, no retry.

use gloo_net::http::{Request, Response};
use shared::dto::auth::{ApiMessage, LoginRequest, RegisterRequest, TokenResponse};

use crate::config;

/// Shown when a login fails and the backend supplied no message.
pub const LOGIN_FALLBACK: &str = "Incorrect Credentials. Please try again.";

/// Shown when a registration fails and the backend supplied no message.
pub const REGISTER_FALLBACK: &str = "Either username or email is already registered with.";

/// Structured failure handed back to the form for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Log in with username and password.
///
/// Returns the backend-issued session token on success; the caller stores
/// it in the session context and navigates to the dashboard.
pub async fn login(request: &LoginRequest) -> Result<String, AuthFailure> {
    log::info!("Attempting login for '{}'", request.username);

    let url = format!("{}/api/auth/login", config::api_base());
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| {
            log::error!("Login request build error: {:?}", e);
            AuthFailure::new(LOGIN_FALLBACK)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Login network error: {:?}", e);
            AuthFailure::new(LOGIN_FALLBACK)
        })?;

    if !response.ok() {
        return Err(failure_from(response, LOGIN_FALLBACK).await);
    }

    match response.json::<TokenResponse>().await {
        Ok(body) => {
            log::info!("Login successful");
            Ok(body.token)
        }
        Err(e) => {
            // 2xx without a token is a backend contract violation; treat it
            // like a failed login rather than crashing the form.
            log::error!("Login response parse error: {:?}", e);
            Err(AuthFailure::new(LOGIN_FALLBACK))
        }
    }
}

/// Register a new user.
///
/// The caller has already confirmed the password fields match. On success
/// the account exists but no token is issued; the user logs in next.
pub async fn register(request: &RegisterRequest) -> Result<(), AuthFailure> {
    log::info!(
        "Registering '{}' as {}",
        request.username,
        request.role.as_str()
    );

    let url = format!("{}/api/auth/createUser", config::api_base());
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| {
            log::error!("Registration request build error: {:?}", e);
            AuthFailure::new(REGISTER_FALLBACK)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Registration network error: {:?}", e);
            AuthFailure::new(REGISTER_FALLBACK)
        })?;

    if !response.ok() {
        return Err(failure_from(response, REGISTER_FALLBACK).await);
    }

    log::info!("Registration successful");
    Ok(())
}

/// Extract the backend's `{ message }` error body, falling back to the
/// endpoint's fixed string when the body is absent or malformed.
async fn failure_from(response: Response, fallback: &str) -> AuthFailure {
    let status = response.status();
    let body = response.json::<ApiMessage>().await.unwrap_or_default();
    let message = body.into_message(fallback);
    log::warn!("Request failed with status {}: {}", status, message);
    AuthFailure::new(message)
}
