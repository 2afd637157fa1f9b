//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::application::dto::{ShortenUrlRequest, ShortenUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted long URL.
///
/// # Endpoint
///
/// `POST /api/url` (also `POST /`)
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortCode": "aB3dE9",
///   "shortUrl": "http://localhost:3000/aB3dE9",
///   "longUrl": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, the URL is invalid, or no
/// free short code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenUrlResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let response = state.url_service.shorten_url(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
