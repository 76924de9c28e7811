//! Workout CRUD facade.
//!
//! Update and delete address the record by id via a query parameter, which
//! is how the backend routes those endpoints.

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

use super::error::ApiError;
use super::http;
use super::types::{Workout, WorkoutPayload};

const LIST_PATH: &str = "/api/workouts";
const CREATE_PATH: &str = "/api/workouts/create";

pub(crate) fn update_path(id: i64) -> String {
    format!("/api/workouts/update?id={id}")
}

pub(crate) fn delete_path(id: i64) -> String {
    format!("/api/workouts/delete?id={id}")
}

/// Fetch all workouts via `GET /api/workouts`. The backend answers `null`
/// instead of `[]` when the user has no entries.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn list() -> Result<Vec<Workout>, ApiError> {
    let workouts: Option<Vec<Workout>> = http::get_json(LIST_PATH).await?;
    Ok(workouts.unwrap_or_default())
}

/// Create a workout via `POST /api/workouts/create`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn create(payload: &WorkoutPayload) -> Result<Workout, ApiError> {
    http::post_json(CREATE_PATH, payload).await
}

/// Update a workout via `PUT /api/workouts/update?id=`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn update(id: i64, payload: &WorkoutPayload) -> Result<Workout, ApiError> {
    http::put_json(&update_path(id), payload).await
}

/// Delete a workout via `DELETE /api/workouts/delete?id=`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let _: serde_json::Value = http::delete_json(&delete_path(id)).await?;
    Ok(())
}
