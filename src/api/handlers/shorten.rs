//! Handler for the shorten endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a single long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:3000/abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an empty or malformed URL, 503 when the
/// store is unreachable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let mapping = state.shortener.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&mapping.short_id),
    }))
}
