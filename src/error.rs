//! Application error taxonomy and HTTP mapping.
//!
//! Every fallible operation in the crate returns [`AppError`]. The HTTP layer
//! converts it into a JSON error body via [`IntoResponse`]; store-level
//! failures are mapped centrally in the `From<sqlx::Error>` impl.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error cases surfaced by the shortening core and its HTTP glue.
///
/// - [`AppError::DuplicateKey`] is transient: `shorten` absorbs it in the
///   collision-retry loop and it never reaches API callers from that path.
/// - [`AppError::StoreUnavailable`] is retryable from the caller's side;
///   the core never retries it beyond the collision loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is empty, malformed, or not absolute.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// No mapping exists for the requested identifier.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The store rejected an insert because the identifier already exists.
    #[error("{message}")]
    DuplicateKey { message: String, details: Value },

    /// The collision-retry bound was exhausted without finding a free
    /// identifier.
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },

    /// The backing store could not be reached or timed out.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },

    /// Unexpected failure that fits no other category.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn duplicate_key(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateKey {
            message: message.into(),
            details,
        }
    }
    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_url", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::DuplicateKey { message, details } => {
                (StatusCode::CONFLICT, "duplicate_key", message, details)
            }
            AppError::GenerationExhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "generation_exhausted",
                message,
                details,
            ),
            AppError::StoreUnavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps store-level failures onto the application taxonomy.
///
/// Unique-constraint violations become [`AppError::DuplicateKey`] so the
/// service can treat a lost insert race exactly like a collision probe.
/// Connectivity failures (pool timeout, closed pool, I/O, TLS) become
/// [`AppError::StoreUnavailable`]; anything else is [`AppError::Internal`].
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::duplicate_key(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            return AppError::internal("Database error", json!({}));
        }

        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                AppError::store_unavailable("Database unreachable", json!({}))
            }
            _ => AppError::internal("Database error", json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_url("Request validation failed", json!(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::invalid_url("bad", json!({}))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::not_found("missing", json!({}))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::duplicate_key("taken", json!({}))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::generation_exhausted("exhausted", json!({}))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::store_unavailable("down", json!({}))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(AppError::internal("boom", json!({}))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_store_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_io_error_maps_to_store_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::from(sqlx::Error::Io(io));
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_row_not_found_maps_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::invalid_url("Invalid URL format", json!({}));
        assert_eq!(err.to_string(), "Invalid URL format");
    }
}
