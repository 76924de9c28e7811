//! Account facade: authentication, profile, and liveness calls.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is caught here. Session mutations (storing/clearing the token)
//! are the session component's job; these functions only move JSON.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http;
use super::types::{AuthResponse, Health, LoginRequest, RegisterRequest, User};

pub(crate) const LOGIN_PATH: &str = "/api/login";
pub(crate) const REGISTER_PATH: &str = "/api/register";
pub(crate) const LOGOUT_PATH: &str = "/api/logout";
pub(crate) const PROFILE_PATH: &str = "/api/profile";
pub(crate) const HEALTH_PATH: &str = "/health";

/// Authenticate with email/password via `POST /api/login`.
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged; the 401
/// case cannot invalidate an existing session here since login is issued
/// unauthenticated.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    http::post_json(LOGIN_PATH, request).await
}

/// Create an account via `POST /api/register`; the backend logs the new
/// user in and returns the same `{user, token}` shape as login.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    http::post_json(REGISTER_PATH, request).await
}

/// Invalidate the server-side session via `POST /api/logout`.
///
/// # Errors
///
/// Returns the backend error; callers treat this call as best-effort.
pub async fn logout() -> Result<(), ApiError> {
    let _: serde_json::Value = http::post_empty(LOGOUT_PATH).await?;
    Ok(())
}

/// Fetch the current user's profile via `GET /api/profile`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn fetch_profile() -> Result<User, ApiError> {
    http::get_json(PROFILE_PATH).await
}

/// Liveness check via `GET /health`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn health() -> Result<Health, ApiError> {
    http::get_json(HEALTH_PATH).await
}
