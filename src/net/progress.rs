//! Body-progress CRUD facade. Mirrors the workout facade over the
//! `/api/progress` endpoints.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use super::error::ApiError;
use super::http;
use super::types::{Progress, ProgressPayload};

const LIST_PATH: &str = "/api/progress";
const CREATE_PATH: &str = "/api/progress/create";

pub(crate) fn update_path(id: i64) -> String {
    format!("/api/progress/update?id={id}")
}

pub(crate) fn delete_path(id: i64) -> String {
    format!("/api/progress/delete?id={id}")
}

/// Fetch all progress entries via `GET /api/progress`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn list() -> Result<Vec<Progress>, ApiError> {
    let entries: Option<Vec<Progress>> = http::get_json(LIST_PATH).await?;
    Ok(entries.unwrap_or_default())
}

/// Create a progress entry via `POST /api/progress/create`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn create(payload: &ProgressPayload) -> Result<Progress, ApiError> {
    http::post_json(CREATE_PATH, payload).await
}

/// Update a progress entry via `PUT /api/progress/update?id=`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn update(id: i64, payload: &ProgressPayload) -> Result<Progress, ApiError> {
    http::put_json(&update_path(id), payload).await
}

/// Delete a progress entry via `DELETE /api/progress/delete?id=`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let _: serde_json::Value = http::delete_json(&delete_path(id)).await?;
    Ok(())
}
