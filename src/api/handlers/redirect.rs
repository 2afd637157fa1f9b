//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/url/{short_code}` (also `GET /{short_code}`)
///
/// # Response
///
/// `301 Moved Permanently` with the stored long URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.url_service.get_url(&short_code).await?;

    let location = location_header(mapping.long_url()).ok_or_else(|| {
        AppError::internal(format!(
            "Stored URL for '{}' cannot be sent as a Location header",
            short_code
        ))
    })?;

    debug!(short_code = %short_code, "Redirecting to {}", mapping.long_url());

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// The stored URL as a header value, or its `Url` serialization when the raw
/// string holds bytes a header cannot carry (rows written before control
/// characters were rejected).
fn location_header(long_url: &str) -> Option<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Some(value);
    }

    let normalized = Url::parse(long_url).ok()?;
    warn!("Stored URL is not header-safe, redirecting to {}", normalized);
    HeaderValue::from_str(normalized.as_str()).ok()
}
