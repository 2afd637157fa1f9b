//! URL route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shorten and redirect routes, relative to their mount point.
///
/// # Endpoints
///
/// - `POST /`              - Create a short URL
/// - `GET  /{short_code}`  - Redirect to the stored long URL
///
/// Mounted both under `/api/url` and at the root.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/{short_code}", get(redirect_handler))
}
