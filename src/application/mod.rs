//! Application layer: the shorten and resolve operations.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::UrlService`] - Short code allocation and lookup
//! - [`dto`] - Request and response views of the shorten operation

pub mod dto;
pub mod services;
