//! Data Transfer Objects for the shorten operation.
//!
//! Field names are camelCase on the wire.

pub mod shorten;

pub use shorten::{ShortenUrlRequest, ShortenUrlResponse};
