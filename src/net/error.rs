//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Two shapes reach page code: transport failures and non-2xx statuses with
//! a display message. Facades never catch; pages store `ApiError::message`
//! in their local error signal. No retries, no backoff.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// An error produced by a backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Display message extracted from the response body.
        message: String,
    },
}

impl ApiError {
    /// The text a page should render for this error.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(message) | ApiError::Status { message, .. } => message,
        }
    }

    /// Status code, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Status { status, message } => write!(f, "{status}: {message}"),
        }
    }
}

/// Extract a display message from an error response body.
///
/// The backend sends `{"error": "...", "message": "..."}` on failure, but
/// proxies and older endpoints may answer with a bare string or an empty
/// body. Fallback order: structured `message` field, structured `error`
/// field, raw body text, generic status line.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(serde_json::Value::as_str) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
        // A JSON string body ("not found") still counts as a raw message.
        if let Some(text) = value.as_str() {
            if !text.is_empty() {
                return text.to_owned();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }
    format!("request failed with status {status}")
}
