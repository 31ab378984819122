//! Identifier allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::id_generator::{generate_id, DEFAULT_ID_LENGTH};
use serde_json::json;

/// Upper bound on collision retries before a shorten request is failed.
///
/// With a six-character identifier this bound is defensive only: hitting it
/// would require two hundred consecutive collisions against ~5.7e10
/// combinations.
const MAX_ATTEMPTS: usize = 200;

/// Default number of entries returned by a history query.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Largest history limit a caller may request; larger values are clamped.
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Service turning long URLs into unique short identifiers and back.
///
/// Stateless between calls: every lookup and every collision probe goes to
/// the authoritative store, so multiple service instances can run
/// concurrently without shared memory.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    id_length: usize,
}

impl ShortenerService {
    /// Creates a service generating identifiers of the default length (6).
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self::with_id_length(repository, DEFAULT_ID_LENGTH)
    }

    /// Creates a service with an explicit identifier length.
    ///
    /// Tests shrink the length to force collisions; production code should
    /// use [`ShortenerService::new`].
    pub fn with_id_length(repository: Arc<dyn MappingRepository>, id_length: usize) -> Self {
        Self {
            repository,
            id_length,
        }
    }

    /// Shortens a URL, returning the persisted mapping.
    ///
    /// Generates random candidates until one is free, probing the store
    /// before each insert. A [`AppError::DuplicateKey`] from `insert`
    /// means the probe raced a concurrent writer for the same candidate;
    /// it is treated exactly like a probe collision and retried, never
    /// surfaced to the caller.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `url` is empty or not an absolute URL
    ///   with a scheme and host; nothing is written to the store.
    /// - [`AppError::GenerationExhausted`] after the retry bound (200
    ///   attempts) is exhausted.
    /// - [`AppError::StoreUnavailable`] / [`AppError::Internal`] propagated
    ///   from the store.
    pub async fn shorten(&self, url: &str) -> Result<UrlMapping, AppError> {
        validate_url(url)?;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_id(self.id_length);

            if self.repository.exists(&candidate).await? {
                continue;
            }

            match self.repository.insert(&candidate, url).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::DuplicateKey { .. }) => {
                    // Lost the race between the probe and the insert.
                    tracing::debug!(%candidate, "insert raced a concurrent writer, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_ATTEMPTS,
            id_length = self.id_length,
            "exhausted identifier generation attempts"
        );

        Err(AppError::generation_exhausted(
            "Failed to generate a unique short identifier",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short identifier to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] on a miss. Translating the miss into
    /// a user-visible response is the caller's job; no redirect happens
    /// here.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })
    }

    /// Returns the most recently created mappings, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and is clamped to
    /// `1..=`[`MAX_HISTORY_LIMIT`].
    pub async fn history(&self, limit: Option<i64>) -> Result<Vec<UrlMapping>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        self.repository.list_recent(limit).await
    }
}

/// Validates that `url` is a non-empty absolute URL with a scheme and host.
fn validate_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::invalid_url("URL is required", json!({})));
    }

    let parsed = url::Url::parse(url).map_err(|e| {
        AppError::invalid_url("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if !parsed.has_host() {
        return Err(AppError::invalid_url(
            "URL must have a host",
            json!({ "url": url }),
        ));
    }

    Ok(())
}
