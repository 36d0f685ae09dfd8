//! Error handling module for the Smile Vinyl backend.
//!
//! Every internal fault, whatever its origin, is presented to the caller as the
//! same generic 500 body. Validation failures are the only client errors and
//! carry a specific message. The real cause goes to the log, never to the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::kv::KvError;
use crate::storage::StorageError;

/// Body of the generic internal-failure response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to process request";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request is missing or malformed in a way the client can fix
    Validation(String),
    /// Key-value store failure
    Kv(String),
    /// Object-storage failure
    Storage(String),
    /// Catalog file could not be parsed
    Parse(String),
    /// Template rendering failure
    Render(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Kv(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message exposed to the caller.
    ///
    /// Only validation errors expose their own message; everything else
    /// collapses to the generic internal-failure body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {}", msg),
            AppError::Kv(msg) => write!(f, "key-value store error: {}", msg),
            AppError::Storage(msg) => write!(f, "object storage error: {}", msg),
            AppError::Parse(msg) => write!(f, "catalog parse error: {}", msg),
            AppError::Render(msg) => write!(f, "render error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<KvError> for AppError {
    fn from(err: KvError) -> Self {
        tracing::error!("Key-value store error: {:?}", err);
        AppError::Kv(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Object storage error: {:?}", err);
        AppError::Storage(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        tracing::error!("Catalog parse error: {:?}", err);
        AppError::Parse(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        tracing::error!("Template render error: {:?}", err);
        AppError::Render(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_share_one_public_message() {
        let errors = [
            AppError::Kv("connection refused".to_string()),
            AppError::Storage("object missing".to_string()),
            AppError::Parse("bad row".to_string()),
            AppError::Render("template".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_validation_error_keeps_its_message() {
        let err = AppError::Validation("serial_number is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "serial_number is required");
    }
}
