//! Meal-plan facade. Generation happens server-side from the user's goal;
//! the client only fetches the result.

use super::error::ApiError;
use super::http;
use super::types::MealPlan;

const MEAL_PLAN_PATH: &str = "/api/meal-plan";

/// Generate/fetch the current user's meal plan via `GET /api/meal-plan`.
///
/// # Errors
///
/// Propagates the backend error unchanged.
pub async fn fetch() -> Result<MealPlan, ApiError> {
    http::get_json(MEAL_PLAN_PATH).await
}
