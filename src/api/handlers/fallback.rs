//! Handler for unmatched routes.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Returns `404 { "error": "Route not found" }`.
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
