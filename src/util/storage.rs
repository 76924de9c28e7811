//! Durable session mirror in browser local storage.
//!
//! DESIGN
//! ======
//! Storage holds two keys: the opaque bearer token and the serialized user.
//! It is written only by the session component, read at startup restoration
//! and by the outbound HTTP interceptor (token only), and cleared through
//! the single [`clear_session`] function that both explicit logout and the
//! 401 invalidation hook share.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Stored bearer token, if any. Presence implies a previously successful
/// authentication; it does not prove the token is still valid.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_storage::Storage as _;
        gloo_storage::LocalStorage::get::<String>(TOKEN_KEY).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Stored user projection, if any.
pub fn stored_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_storage::Storage as _;
        gloo_storage::LocalStorage::get::<User>(USER_KEY).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mirror a fresh login/registration into durable storage.
pub fn store_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_storage::Storage as _;
        if let Err(err) = gloo_storage::LocalStorage::set(TOKEN_KEY, token) {
            log::warn!("failed to persist token: {err}");
        }
        if let Err(err) = gloo_storage::LocalStorage::set(USER_KEY, user) {
            log::warn!("failed to persist user: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove both session keys. Shared by logout and 401 invalidation so the
/// two paths converge on the same cleared storage.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        use gloo_storage::Storage as _;
        gloo_storage::LocalStorage::delete(TOKEN_KEY);
        gloo_storage::LocalStorage::delete(USER_KEY);
    }
}
