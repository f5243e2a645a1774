//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used
//! consistently across the service. It follows the `thiserror` pattern for
//! ergonomic error handling.
//!
//! ## Design Philosophy
//!
//! - **Single Error Type**: every failing stage produces an `AppError`
//! - **Descriptive Messages**: each variant carries a context string that is
//!   reported to the client
//! - **HTTP Mapping**: each variant maps to exactly one HTTP status code
//! - **Terminal Translation**: the `IntoResponse` impl is the single point
//!   where a failure is serialized into an HTTP response, so failure paths
//!   are visible in the type system instead of relying on implicit
//!   exception propagation
//!
//! Failures with no status of their own (anything routed through
//! `anyhow::Error`) default to 500 Internal Server Error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all failure scenarios.
///
/// Each variant includes a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection or query error.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid user input validation error.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or rejected credentials.
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Requested resource or route not found.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message reported to the client.
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::Database(msg)
            | AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => msg,
        }
    }

    /// Get the stable error code name for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Database(_) => "Database",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Terminal error translation: serialize the error into an HTTP response.
///
/// This is the last stage a failed request passes through. Every failure,
/// whatever stage raised it, ends up here and becomes a JSON body of the
/// form `{"message": ..., "code": ...}` with the variant's status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED => {
                tracing::debug!("client error: {}", self);
            }
            _ => {
                tracing::error!("server error: {}", self);
            }
        }

        let body = Json(json!({
            "message": self.message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
///
/// A plain failure carries no status of its own, so it reports as 500.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("database record not found".to_string())
            }
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            AppError::NotFound("invalid route".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized("unauthorized".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidInput("bad field".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Config("missing".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database("locked".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn plain_failure_defaults_to_internal() {
        let err = AppError::from(anyhow::anyhow!("something went wrong"));

        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "something went wrong");
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn message_passes_through_unchanged() {
        let err = AppError::Unauthorized("unauthorized".into());

        assert_eq!(err.message(), "unauthorized");
        assert_eq!(err.code(), "Unauthorized");
    }
}
