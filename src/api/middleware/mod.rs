//! HTTP middleware for request processing.
//!
//! Provides observability, panic recovery and error diagnostics.

pub mod diagnostics;
pub mod panic;
pub mod tracing;
