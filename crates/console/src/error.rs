//! Unified error handling with Sentry integration.
//!
//! Failures render the flash fragment and retarget htmx at `#flash`, so an
//! error from any fragment request lands in the same place on the page.

use askama::Template;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;
use crate::routes::FlashTemplate;
use crate::view::Flash;

/// Application-level error type for the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store API call failed.
    #[error("Store error: {0}")]
    Api(#[from] ApiError),

    /// Upload could not be read.
    #[error("Bad request: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Api(err) => match err.status() {
                Some(status) => (status, err.user_message().to_string()),
                None => {
                    // The store never answered (or answered garbage)
                    let event_id = sentry::capture_error(&self);
                    tracing::error!(
                        error = %self,
                        sentry_event_id = %event_id,
                        "Request error"
                    );
                    (StatusCode::BAD_GATEWAY, err.user_message().to_string())
                }
            },
            Self::Multipart(err) => (err.status(), err.body_text()),
        };

        let template = FlashTemplate {
            flash: Some(Flash::error(message)),
        };
        let body = template.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        });

        (
            status,
            AppendHeaders([("HX-Retarget", "#flash"), ("HX-Reswap", "innerHTML")]),
            Html(body),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
