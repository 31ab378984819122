//! The persisted short-identifier to URL mapping.

use chrono::{DateTime, Utc};

/// A single short-identifier mapping.
///
/// Created exactly once by a successful shorten operation, never updated or
/// deleted afterwards. `short_id` is unique across the whole store;
/// `original_url` is not (the same long URL may be shortened many times).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    /// Surrogate key; reflects insertion order and breaks `created_at` ties
    /// in recency queries.
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    /// Assigned by the store at insertion, not by the caller.
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(id: i64, short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
        }
    }
}
