#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use shortify::application::services::ShortenerService;
use shortify::domain::entities::UrlMapping;
use shortify::domain::repositories::MappingRepository;
use shortify::error::AppError;
use shortify::state::AppState;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// In-memory stand-in for the PostgreSQL store.
///
/// Implements the same contract: atomic check-and-insert under a single
/// lock, store-assigned timestamps, and newest-first listing with ties
/// broken by insertion order.
pub struct InMemoryMappingRepository {
    rows: Mutex<Vec<UrlMapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Number of persisted mappings.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn exists(&self, short_id: &str) -> Result<bool, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|m| m.short_id == short_id))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.short_id == short_id).cloned())
    }

    async fn insert(&self, short_id: &str, original_url: &str) -> Result<UrlMapping, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|m| m.short_id == short_id) {
            return Err(AppError::duplicate_key(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_id_key" }),
            ));
        }

        let mapping = UrlMapping::new(
            rows.len() as i64 + 1,
            short_id.to_string(),
            original_url.to_string(),
            Utc::now(),
        );
        rows.push(mapping.clone());

        Ok(mapping)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();

        let mut sorted = rows.clone();
        sorted.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        sorted.truncate(limit as usize);

        Ok(sorted)
    }
}

/// Store whose every operation fails with `StoreUnavailable`.
pub struct UnavailableMappingRepository;

#[async_trait]
impl MappingRepository for UnavailableMappingRepository {
    async fn exists(&self, _short_id: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn find_by_short_id(&self, _short_id: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _short_id: &str, _original_url: &str) -> Result<UrlMapping, AppError> {
        Err(unavailable())
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        Err(unavailable())
    }
}

fn unavailable() -> AppError {
    AppError::store_unavailable("Database unreachable", json!({}))
}

pub fn create_test_state(repository: Arc<dyn MappingRepository>) -> AppState {
    let shortener = Arc::new(ShortenerService::new(repository));
    AppState::new(shortener, TEST_BASE_URL)
}
