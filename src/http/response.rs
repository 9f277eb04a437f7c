//! Uniform JSON error envelope.
//!
//! Every non-2xx outcome leaves the process in the same shape:
//! `{error, status: "error", status_code}` with the HTTP status mirrored in
//! the body. Routing misses, method mismatches, handler faults, and panics
//! all funnel through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The error envelope body.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: &'static str,
    pub status_code: u16,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: "error",
            status_code: status.as_u16(),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Fault raised during handler execution.
///
/// Internal detail is logged at error severity; the response body carries
/// only a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "unhandled fault in handler");
                ErrorEnvelope::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_mirrors_status_in_body() {
        let envelope = ErrorEnvelope::new(StatusCode::NOT_FOUND, "no such route");
        assert_eq!(envelope.status, "error");
        assert_eq!(envelope.status_code, 404);

        let response = envelope.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_faults_collapse_to_generic_500() {
        let response = ApiError::Internal("db handle poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
