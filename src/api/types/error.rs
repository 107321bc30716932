//! Plain-text HTTP errors
//!
//! Failures are answered with the bare status code as body, e.g. `500`.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::DomainError;

/// API error with status code; the message is logged, never sent
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status.as_u16(), error = %self.message, "5XX");
        } else {
            warn!(status = %self.status.as_u16(), error = %self.message, "Request rejected");
        }

        (
            self.status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.status.as_u16().to_string(),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        // Swap payloads are produced by our own markup, so any domain
        // failure is reported as a server error
        Self::internal(err.to_string())
    }
}

/// Fallback for unknown paths and unsupported methods on known paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
