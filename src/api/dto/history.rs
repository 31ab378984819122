//! DTOs for the recent-history endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQueryParams {
    /// Maximum number of entries to return (default 10, clamped to 1..=100).
    pub limit: Option<i64>,
}

/// The most recently created mappings, newest first.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryItem>,
}

/// A single history entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
