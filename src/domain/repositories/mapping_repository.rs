//! Repository trait for the durable identifier store.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing key-value store for [`UrlMapping`].
///
/// Uniqueness of `short_id` must be enforced by the store itself, not by
/// callers: two requests may race between an existence probe and an insert,
/// and only the store's own unique-key constraint can arbitrate that race.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns whether a mapping with the given identifier exists.
    ///
    /// Side-effect free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn exists(&self, short_id: &str) -> Result<bool, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` on a hit
    /// - `Ok(None)` on a miss
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts a new mapping. The store assigns `created_at`.
    ///
    /// The insert is atomic: a concurrent insert of the same `short_id`
    /// cannot silently overwrite or succeed twice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if `short_id` already exists.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn insert(&self, short_id: &str, original_url: &str) -> Result<UrlMapping, AppError>;

    /// Returns up to `limit` mappings, newest first.
    ///
    /// Ordered by `created_at` descending with ties broken by insertion
    /// order (most recent insert wins). The result is a finite snapshot,
    /// not a live stream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError>;
}
