//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies owned by the HTTP layer
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, panic recovery and error diagnostics
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
