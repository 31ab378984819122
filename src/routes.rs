//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Welcome banner
//! - `GET  /health`      - Health check (database)
//! - `POST /shorten`     - Create a short URL
//! - `GET  /history`     - Recently created mappings, newest first
//! - `GET  /{short_id}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, history_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes take precedence over the `/{short_id}` capture, so
/// `health`, `shorten`, and `history` are not resolvable as identifiers.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/history", get(history_handler))
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn welcome_handler() -> &'static str {
    "Welcome to Shortify - a simple URL shortener"
}
