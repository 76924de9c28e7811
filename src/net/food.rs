//! Barcode food-lookup facade.

use super::error::ApiError;
use super::http;
use super::types::{Food, FoodSearchRequest};

const SEARCH_PATH: &str = "/api/food/search";

/// Look up a food by barcode via `POST /api/food/search`.
///
/// # Errors
///
/// Propagates the backend error unchanged (an unknown barcode comes back
/// as a 404 with a message).
pub async fn search(barcode: &str) -> Result<Food, ApiError> {
    let request = FoodSearchRequest { barcode: barcode.to_owned() };
    http::post_json(SEARCH_PATH, &request).await
}
