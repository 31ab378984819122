//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// State shared by all request handlers.
///
/// The core deals only in identifiers and URLs; composing the public short
/// URL from the configured base is the HTTP layer's job, so `base_url`
/// lives here and not in the service.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, base_url: impl Into<String>) -> Self {
        Self {
            shortener,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Composes the full public short URL for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url, short_id)
    }
}
