//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`; `IntoResponse for AppError` is
//! the single place where failures become a status code plus a
//! `{"message": ...}` body.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use catalog_core::{ApiMessage, ProductValidationError};

use crate::db::RepositoryError;

/// Message returned for every 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for the store.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Required product fields are missing.
    #[error(transparent)]
    Validation(#[from] ProductValidationError),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Malformed request body or path.
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit.
    #[error("Request body too large")]
    PayloadTooLarge,
}

impl AppError {
    /// The product-not-found error.
    #[must_use]
    pub const fn product_not_found() -> Self {
        Self::NotFound("Product")
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(RepositoryError::Database(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(RepositoryError::NotFound) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(RepositoryError::NotFound) => Self::product_not_found().to_string(),
            Self::Database(RepositoryError::Database(_)) => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        };

        (status, Json(ApiMessage::new(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
