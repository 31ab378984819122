//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Every lookup round-trips to the store; the service keeps no cache, so
/// the redirect always reflects the authoritative persisted state.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never created.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.shortener.resolve(&short_id).await?;

    Ok(Redirect::temporary(&mapping.original_url))
}
