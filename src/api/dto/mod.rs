//! Response bodies that belong to the HTTP layer only.
//!
//! Shorten request/response views live in [`crate::application::dto`].

pub mod health;
