//! Error diagnostics for non-production environments.
//!
//! [`AppError`](crate::error::AppError) responses carry an [`ErrorReport`]
//! extension. Outside production this middleware rewrites the body to include
//! it:
//!
//! ```json
//! { "error": "Failed to find URL", "stack": ["Failed to find URL", "pool timed out"] }
//! ```
//!
//! Internal errors additionally get the unredacted `message`. In production
//! responses pass through untouched.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::Environment;
use crate::error::ErrorReport;

pub async fn layer(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if environment.is_production() {
        return response;
    }

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let body = if report.internal {
        json!({
            "error": report.public_message,
            "message": report.message,
            "stack": report.stack,
        })
    } else {
        json!({
            "error": report.public_message,
            "stack": report.stack,
        })
    };

    let mut detailed = (response.status(), Json(body)).into_response();
    detailed.extensions_mut().insert(report);
    detailed
}
