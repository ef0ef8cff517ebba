//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures store failures to Sentry
//! before responding to the client. All JSON route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Client input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// JSON error body returned to clients: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry; validation errors are the
        // caller's problem and stay out of error tracking.
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, message) = match &self {
            // Don't expose internal error details to clients
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_owned()),
            Self::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let response = AppError::Validation(ValidationError::MissingField).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let err = feedback_collector_core::EmailError::MissingAtSymbol;
        let response = AppError::Validation(ValidationError::InvalidEmail(err)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors_are_server_errors() {
        let err = AppError::Database(RepositoryError::DataCorruption("bad row".to_owned()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation(ValidationError::MissingField);
        assert_eq!(err.to_string(), "Validation error: All fields are required");
    }
}
