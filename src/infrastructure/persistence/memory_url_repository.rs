//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Raised by [`InMemoryUrlRepository::create`] when the code is already stored.
#[derive(Debug, thiserror::Error)]
#[error("duplicate key value violates unique constraint on short_code '{0}'")]
pub struct DuplicateShortCode(pub String);

/// Process-local URL table keyed by short code.
///
/// Inserts check and write under a single write lock, so uniqueness holds
/// under concurrent requests. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    rows: RwLock<HashMap<String, UrlMapping>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, mapping: UrlMapping) -> Result<UrlMapping, AppError> {
        let mut rows = self.rows.write().await;

        if rows.contains_key(mapping.short_code()) {
            return Err(AppError::storage(
                "Failed to create URL",
                DuplicateShortCode(mapping.short_code().to_string()),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = mapping.persisted(id, Utc::now());
        rows.insert(stored.short_code().to_string(), stored.clone());

        Ok(stored)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.rows.read().await.get(short_code).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.read().await.len() as i64)
    }
}
