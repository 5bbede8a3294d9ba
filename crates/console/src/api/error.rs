use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// A store API call, used to pick the message shown when the store gave none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown to the user when the failure carries no server message.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::List => "Error fetching products",
            Self::Get => "Error fetching product",
            Self::Create => "Error creating product",
            Self::Update => "Failed to update",
            Self::Delete => "Failed to delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fallback_message())
    }
}

/// Errors that can occur when calling the store API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{operation}: {source}")]
    Request {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// A success response whose body could not be decoded.
    #[error("{operation}: unexpected response body: {source}")]
    Response {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl ApiError {
    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Request { operation, .. } | Self::Response { operation, .. } => {
                operation.fallback_message()
            }
            Self::Api { message, .. } => message,
        }
    }

    /// HTTP status reported by the store, if it answered.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request { .. } | Self::Response { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_server_message() {
        let err = ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "Name and price are required".to_string(),
        };
        assert_eq!(err.user_message(), "Name and price are required");
        assert_eq!(err.to_string(), "Name and price are required");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(Operation::List.to_string(), "Error fetching products");
        assert_eq!(Operation::Create.fallback_message(), "Error creating product");
        assert_eq!(Operation::Update.fallback_message(), "Failed to update");
        assert_eq!(Operation::Delete.fallback_message(), "Failed to delete");
    }
}
