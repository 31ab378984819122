//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL store for short-identifier mappings.
///
/// Uniqueness of `short_id` is enforced by the `urls_short_id_key` unique
/// constraint, so a lost insert race surfaces as
/// [`AppError::DuplicateKey`] instead of a silent overwrite. `created_at`
/// comes from the database's `now()`, keeping history ordering consistent
/// across service instances.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn exists(&self, short_id: &str) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_id = $1)",
        )
        .bind(short_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(found)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT id, short_id, original_url, created_at FROM urls WHERE short_id = $1",
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, short_id: &str, original_url: &str) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (short_id, original_url)
            VALUES ($1, $2)
            RETURNING id, short_id, original_url, created_at
            "#,
        )
        .bind(short_id)
        .bind(original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let mappings = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_id, original_url, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }
}
