//! Error types for Keygate
//!
//! Every failure is terminal for its request and reported directly to the
//! caller as a flat `{"error": "<message>"}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested provider has no credential configured. No outbound
    /// call is attempted in this state.
    #[error("{0} API key not configured on server")]
    ApiKeyMissing(&'static str),

    #[error("Not found")]
    NotFound,

    /// Network failure, timeout, or a non-JSON upstream body. Upstream
    /// non-2xx responses with a JSON body are not errors; they pass
    /// through with their original status.
    #[error("Server error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ApiKeyMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
