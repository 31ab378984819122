//! Handler for the recent-history endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::dto::history::{HistoryItem, HistoryQueryParams, HistoryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most recently shortened URLs, newest first.
///
/// # Endpoint
///
/// `GET /history?limit=N`
///
/// `limit` defaults to 10; values outside 1..=100 are clamped.
///
/// # Response
///
/// ```json
/// {
///   "history": [
///     {
///       "shortId": "abc123",
///       "shortUrl": "http://localhost:3000/abc123",
///       "originalUrl": "https://example.com/very/long/url",
///       "createdAt": "2023-10-25T10:00:00Z"
///     }
///   ]
/// }
/// ```
pub async fn history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryQueryParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    let mappings = state.shortener.history(params.limit).await?;

    let history = mappings
        .into_iter()
        .map(|m| HistoryItem {
            short_url: state.short_url(&m.short_id),
            short_id: m.short_id,
            original_url: m.original_url,
            created_at: m.created_at,
        })
        .collect();

    Ok(Json(HistoryResponse { history }))
}
