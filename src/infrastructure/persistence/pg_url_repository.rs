//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl UrlRow {
    fn into_domain(self) -> Result<UrlMapping, AppError> {
        UrlMapping::new(
            Some(self.id),
            self.short_code,
            self.long_url,
            self.created_at,
        )
    }
}

/// PostgreSQL repository for URL mappings.
///
/// The `urls_short_code_key` unique constraint makes the database the final
/// arbiter when two requests race for the same code.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Returns true when `err` is the unique violation on `urls.short_code`.
pub fn is_short_code_conflict(err: &sqlx::Error) -> bool {
    let Some(db_err) = err.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && matches!(db_err.constraint(), Some("urls_short_code_key"))
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, mapping: UrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(mapping.short_code())
        .bind(mapping.long_url())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_short_code_conflict(&e) {
                tracing::warn!(short_code = mapping.short_code(), "Short code taken concurrently");
            }
            AppError::storage("Failed to create URL", e)
        })?;

        row.into_domain()
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| AppError::storage("Failed to find URL", e))?;

        row.map(UrlRow::into_domain).transpose()
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| AppError::storage("Failed to count URLs", e))
    }
}
