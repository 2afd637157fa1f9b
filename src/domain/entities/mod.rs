//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code to long URL mapping

pub mod url_mapping;

pub use url_mapping::UrlMapping;
