//! Converts handler panics into JSON 500 responses.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::Environment;
use crate::error::INTERNAL_ERROR_MESSAGE;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Catches panics and answers `500 { "error": "Internal server error" }`.
///
/// Outside production the panic payload is added as `message`.
pub fn layer(environment: Environment) -> CatchPanicLayer<PanicHandler> {
    if environment.is_production() {
        CatchPanicLayer::custom(redacted as PanicHandler)
    } else {
        CatchPanicLayer::custom(detailed as PanicHandler)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic payload".to_string()
    }
}

fn redacted(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked: {}", panic_message(payload.as_ref()));

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

fn detailed(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!("Handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE, "message": message })),
    )
        .into_response()
}
