//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/url`              - Create a short URL
//! - `GET  /api/url/{short_code}` - Redirect to the long URL
//! - `POST /`, `GET /{short_code}` - Root aliases of the above
//! - `GET  /health`               - Health check
//! - anything else                - `404 { "error": "Route not found" }`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive
//! - **Panic recovery** - Panics become JSON 500 responses
//! - **Diagnostics** - Error cause chains outside production
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{diagnostics, panic, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let environment = state.environment;

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/url", api::routes::url_routes())
        .merge(api::routes::url_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            environment,
            diagnostics::layer,
        ))
        .layer(panic::layer(environment))
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// [`router`] wrapped so that `/api/url/` and `/api/url` hit the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
