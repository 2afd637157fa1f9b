//! Repository trait for URL mapping storage.

use async_trait::async_trait;

use crate::domain::entities::UrlMapping;
use crate::error::AppError;

/// Storage contract for URL mappings.
///
/// Every call is one atomic unit of work against the backing table; no
/// transaction or lock spans calls. Implementations must be safe to share
/// across concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns it as stored, with the durable
    /// identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the write fails, including a violation
    /// of the unique short code constraint.
    async fn create(&self, mapping: UrlMapping) -> Result<UrlMapping, AppError>;

    /// Looks up the single mapping with the given short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on I/O failure only.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on I/O failure.
    async fn count(&self) -> Result<i64, AppError>;
}
