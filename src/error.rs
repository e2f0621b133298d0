//! HTTP-facing error types.
//!
//! [`AppError`] renders the JSON error envelope used by `/api/*` routes:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```
//!
//! [`TextError`] wraps the same errors for the plain-text routes (`POST /` and
//! `GET /{id}`), which answer client errors with the body `Invalid request`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::SnapshotError;

/// Body returned by plain-text routes for every client error.
pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable envelope payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request(INVALID_REQUEST, details)
    }
}

impl From<SnapshotError> for AppError {
    fn from(e: SnapshotError) -> Self {
        tracing::error!("Snapshot error: {}", e);
        AppError::internal("Failed to persist short URL", json!({}))
    }
}

/// Plain-text rendering of an [`AppError`].
///
/// Client errors (validation and not found) become `400 Invalid request`, matching
/// the contract of the text endpoints; server errors keep their status with a
/// generic body.
#[derive(Debug)]
pub struct TextError(pub AppError);

impl From<AppError> for TextError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<SnapshotError> for TextError {
    fn from(e: SnapshotError) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation { .. } | AppError::NotFound { .. } => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST).into_response()
            }
            AppError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
