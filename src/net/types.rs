//! Wire DTOs for the backend HTTP API.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads verbatim; the client imposes
//! no invariants on them beyond required-field presence at form submission.
//! Records the backend may omit fields on carry `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Training goal chosen at registration; drives meal-plan generation and the
/// default video category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    LoseWeight,
    Hypertrophy,
}

impl Goal {
    /// Human-readable label for headers and profile display.
    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::Hypertrophy => "Hypertrophy",
        }
    }
}

/// Account role assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
    Premium,
}

impl Role {
    /// Wire/display name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Premium => "premium",
        }
    }
}

/// Identity and profile projection returned by the backend. Immutable from
/// the client's perspective except by re-fetching or re-authenticating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub goal: Goal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Height in centimeters, if provided at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms, if provided at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Credentials for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account payload for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub goal: Goal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Successful login/registration response: the user plus an opaque bearer
/// token. Its presence in durable storage implies a previously successful
/// authentication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// A food record from the barcode lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Request body for `POST /api/food/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSearchRequest {
    pub barcode: String,
}

/// Generated meal plan with per-food breakdown and totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub goal: String,
    #[serde(default)]
    pub foods: Vec<Food>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// A workout entry as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in whole minutes.
    pub duration: i64,
    pub calories_burned: f64,
    /// ISO date (`YYYY-MM-DD`).
    pub workout_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create/update body for the workout endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: i64,
    pub calories_burned: f64,
    pub workout_date: String,
}

/// A body-progress entry as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: i64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Body-fat percentage; the backend stores 0 for "not measured".
    #[serde(default)]
    pub body_fat: f64,
    /// Muscle mass in kilograms; 0 for "not measured".
    #[serde(default)]
    pub muscle_mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    pub progress_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create/update body for the progress endpoints. Unmeasured optional
/// metrics are sent as 0, matching what the backend expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressPayload {
    pub weight: f64,
    #[serde(default)]
    pub body_fat: f64,
    #[serde(default)]
    pub muscle_mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub progress_date: String,
}

/// Liveness response from `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}
