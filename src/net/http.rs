//! HTTP client adapter shared by all facades.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Host-side: stubs returning a network error since the backend is only
//! reachable from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two interception points live here. Outbound, every request carries
//! `Authorization: Bearer <token>` when a token exists in durable storage.
//! Inbound, any 401 response invokes the session component's global
//! invalidation hook before the error is re-raised to the caller, so a
//! single expired request tears down the session regardless of which view
//! issued it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::extract_error_message;

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Status that triggers the global session invalidation hook.
pub const UNAUTHORIZED: u16 = 401;

/// Base URL for all backend calls. Overridable at build time via the
/// `FITTRACK_API_URL` environment variable.
pub fn api_base() -> &'static str {
    option_env!("FITTRACK_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for an API path such as `/api/login`.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// `Authorization` header value for a stored bearer token.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// GET `path` and deserialize the JSON response.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::get(&endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(off_browser())
    }
}

/// POST a JSON body to `path` and deserialize the response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(off_browser())
    }
}

/// POST to `path` with no body and deserialize the response.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::post(&endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(off_browser())
    }
}

/// PUT a JSON body to `path` and deserialize the response.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::put(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(off_browser())
    }
}

/// DELETE `path` and deserialize the response.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::delete(&endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(off_browser())
    }
}

#[cfg(not(feature = "hydrate"))]
fn off_browser() -> ApiError {
    ApiError::Network("not available off the browser".to_owned())
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch<T: DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();

    if status == UNAUTHORIZED {
        // Global invalidation hook: clears durable storage and bounces to
        // the login view, then the original error still reaches the caller.
        crate::state::auth::invalidate_session();
    }

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, message: extract_error_message(status, &body) });
    }

    response.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}
