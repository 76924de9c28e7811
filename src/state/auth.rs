//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single writer for session state and its durable-storage mirror.
//! Route guards and user-aware components read the `RwSignal<AuthState>`
//! provided via context; every mutation (login, register, logout, startup
//! restoration, 401 invalidation) goes through the operations here.
//!
//! Two code paths end a session: explicit [`logout`] and the implicit
//! [`invalidate_session`] hook the HTTP adapter fires on any 401. Both
//! clear storage through `util::storage::clear_session` and converge on
//! [`AuthState::cleared`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, User};
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    /// True only while startup restoration has not completed yet.
    pub loading: bool,
}

impl AuthState {
    /// Initial state at process start, before restoration has run.
    pub fn booting() -> Self {
        Self { user: None, authenticated: false, loading: true }
    }

    /// State after a successful login or registration.
    pub fn logged_in(user: User) -> Self {
        Self { user: Some(user), authenticated: true, loading: false }
    }

    /// The logged-out state. Logout and 401 invalidation both end here.
    pub fn cleared() -> Self {
        Self { user: None, authenticated: false, loading: false }
    }

    /// State restored from durable storage at startup. A present token is
    /// trusted optimistically; an expired one surfaces as a 401 on first
    /// use and tears the session down then.
    pub fn restored(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(_), Some(user)) => Self::logged_in(user),
            _ => Self::cleared(),
        }
    }
}

/// Restore the session from durable storage. Invoked once at startup;
/// idempotent for unchanged storage contents.
pub fn restore_session(auth: RwSignal<AuthState>) {
    auth.set(AuthState::restored(storage::token(), storage::stored_user()));
}

/// Authenticate and populate the session.
///
/// # Errors
///
/// On failure the backend error propagates unchanged and the prior session
/// state is left unmodified.
pub async fn login(auth: RwSignal<AuthState>, request: &LoginRequest) -> Result<(), ApiError> {
    let response = api::login(request).await?;
    storage::store_session(&response.token, &response.user);
    auth.set(AuthState::logged_in(response.user));
    Ok(())
}

/// Create an account and populate the session.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(auth: RwSignal<AuthState>, request: &RegisterRequest) -> Result<(), ApiError> {
    let response = api::register(request).await?;
    storage::store_session(&response.token, &response.user);
    auth.set(AuthState::logged_in(response.user));
    Ok(())
}

/// Log out: best-effort server notification, then unconditionally clear
/// durable storage and in-memory state.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout().await {
        log::warn!("logout notification failed: {err}");
    }
    storage::clear_session();
    auth.set(AuthState::cleared());
}

/// Global invalidation hook the HTTP adapter fires on any 401 response.
///
/// Clears the same durable storage as [`logout`], then force-navigates to
/// the login view unless already there. The full navigation reloads the
/// app, which resets in-memory signals to the cleared state.
pub fn invalidate_session() {
    storage::clear_session();

    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let path = location.pathname().unwrap_or_default();
            if should_redirect_after_invalidation(&path) {
                let _ = location.set_href("/login");
            }
        }
    }
}

/// Whether a 401 on the given path warrants bouncing to the login view.
pub(crate) fn should_redirect_after_invalidation(path: &str) -> bool {
    path != "/login"
}
