//! Application error type shared by every layer.
//!
//! [`AppError`] is a closed set of variants. Services return it, repositories
//! wrap their storage failures in it, and the HTTP boundary turns it into a
//! status code and a JSON body through [`IntoResponse`].
//!
//! # Response shape
//!
//! ```json
//! { "error": "Short code 'abc123' not found" }
//! ```
//!
//! Internal errors never leak their message in the body; it is replaced with
//! `"Internal server error"`. The raw message and cause chain travel with the
//! response as an [`ErrorReport`] extension so that
//! [`crate::api::middleware::diagnostics`] can expose them outside production.

use std::error::Error as StdError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Boxed cause carried by [`AppError::Storage`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Public message used for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input or exhausted short-code allocation (400).
    #[error("{0}")]
    Validation(String),

    /// Unknown short code (404).
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure (500).
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: BoxError,
    },

    /// Anything unexpected (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn storage(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to at the service boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to put in a response body.
    pub fn message(&self) -> String {
        match self {
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Display strings of every error in the `source()` chain, outermost first.
    pub fn cause_chain(&self) -> Vec<String> {
        let mut chain = vec![self.to_string()];
        let mut current = self.source();
        while let Some(cause) = current {
            chain.push(cause.to_string());
            current = cause.source();
        }
        chain
    }

    fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid URL data".to_string());

        AppError::Validation(message)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Diagnostic detail attached to every error response as an extension.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    /// What the client already sees in `error`.
    pub public_message: String,
    /// The unredacted message; differs from `public_message` only for internal errors.
    pub message: String,
    pub stack: Vec<String>,
    pub internal: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let stack = self.cause_chain();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), causes = ?stack, "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let report = ErrorReport {
            public_message: self.message(),
            message: self.to_string(),
            stack,
            internal: self.is_internal(),
        };

        let mut response = (
            status,
            Json(ErrorBody {
                error: report.public_message.clone(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(report);
        response
    }
}
