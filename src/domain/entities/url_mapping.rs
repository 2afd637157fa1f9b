//! URL mapping entity.

use chrono::{DateTime, Utc};

use crate::error::AppError;

/// A short code mapped to the original long URL.
///
/// Fields are private and only readable through accessors; a mapping never
/// changes after construction. `id` is `None` until the store has persisted
/// the mapping and assigned its durable identifier.
///
/// Uniqueness of `short_code` is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    id: Option<i64>,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Builds a mapping, rejecting blank short codes and blank URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either `short_code` or `long_url`
    /// is empty after trimming whitespace.
    pub fn new(
        id: Option<i64>,
        short_code: impl Into<String>,
        long_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let short_code = short_code.into();
        let long_url = long_url.into();

        if short_code.trim().is_empty() {
            return Err(AppError::validation("Short code is required"));
        }
        if long_url.trim().is_empty() {
            return Err(AppError::validation("Long URL is required"));
        }

        Ok(Self {
            id,
            short_code,
            long_url,
            created_at,
        })
    }

    /// A mapping that has not been written yet.
    pub fn unsaved(
        short_code: impl Into<String>,
        long_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::new(None, short_code, long_url, Utc::now())
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true once the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns a copy carrying the identifier and timestamp assigned on write.
    pub fn persisted(self, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at,
            ..self
        }
    }
}
