//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the identical redirect behavior, and the
//! guest-only routes (login/register) apply the inverse. The decision is a
//! pure function of session state; effect installers wire it to the router
//! so it re-evaluates on every session mutation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Outcome of evaluating a protected route against session state.
///
/// Per navigation this runs `Unresolved -> {Authenticated, Unauthenticated}`;
/// the unresolved case is bounded by startup restoration completing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Restoration has not resolved yet; render a loading indicator.
    Loading,
    /// Session is live; render the requested view.
    Allow,
    /// No session; redirect to the login view.
    RedirectToLogin,
}

/// Decide what a protected route should do for the given session state.
pub fn protected_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Loading
    } else if state.authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Redirect target for guest-only views (login/register) when a session is
/// already live, preventing re-authentication.
pub fn guest_redirect_target(state: &AuthState) -> Option<&'static str> {
    (!state.loading && state.authenticated).then_some("/dashboard")
}

/// Redirect to `/login` whenever auth has resolved and no session exists.
/// History is replaced so back-navigation cannot return to the protected
/// view.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if protected_outcome(&auth.get()) == GuardOutcome::RedirectToLogin {
            navigate("/login", replace_options());
        }
    });
}

/// Redirect an already-authenticated user away from a guest-only view.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guest_redirect_target(&auth.get()) {
            navigate(target, replace_options());
        }
    });
}

/// Navigation options that replace the current history entry.
pub(crate) fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
