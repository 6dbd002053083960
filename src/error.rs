//! HTTP-facing error type and its JSON rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::ValidationError;

/// JSON error body returned for every failed request.
///
/// ```json
/// { "error": "Bad Request", "message": "state is required", "code": 400 }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub code: u16,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Business-rule violation (400).
    #[error("{message}")]
    Validation { message: String },
    /// Body could not be parsed into the expected schema (422).
    #[error("{message}")]
    Unprocessable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON body for this error.
    pub fn to_error_body(&self) -> ErrorBody {
        let status = self.status();
        ErrorBody {
            error: status.canonical_reason().unwrap_or("Error"),
            message: self.to_string(),
            code: status.as_u16(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.message())
    }
}

/// Request bodies are parsed as JSON regardless of `Content-Type`; any
/// syntax or schema error is a 422.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::unprocessable(format!("Invalid request body: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(%message, "Internal error");
        }

        (self.status(), Json(self.to_error_body())).into_response()
    }
}
