//! Server error types with HTTP status code mapping.
//!
//! [`ServerError`] is the central error type for both demo servers. Each
//! variant maps to a specific HTTP status code and a structured JSON error
//! response. Unknown routes (404) and wrong methods on known paths (405)
//! are handled by default router behavior, not by this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "origin not allowed",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (1000s: rejected request, 3000s: server fault).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category         | HTTP Status               |
/// |-----------|------------------|---------------------------|
/// | 1000–1999 | Rejected request | 403 Forbidden / 400 Bad Request |
/// | 3000–3999 | Server fault     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// WebSocket request origin does not match the serving host.
    #[error("origin not allowed")]
    OriginNotAllowed,

    /// Request targeted the WebSocket path but was not a valid upgrade.
    #[error("could not open websocket connection: {0}")]
    UpgradeRejected(String),

    /// Current timestamp could not be encoded as JSON. Encoding a string
    /// cannot practically fail; the path exists to keep the contract typed.
    #[error("timestamp encode failed: {0}")]
    TimestampEncode(#[from] serde_json::Error),
}

impl ServerError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::OriginNotAllowed => 1001,
            Self::UpgradeRejected(_) => 1002,
            Self::TimestampEncode(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::OriginNotAllowed => StatusCode::FORBIDDEN,
            Self::UpgradeRejected(_) => StatusCode::BAD_REQUEST,
            Self::TimestampEncode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn encode_error() -> serde_json::Error {
        let Err(e) = serde_json::from_str::<String>("{") else {
            panic!("malformed input should not parse");
        };
        e
    }

    #[test]
    fn status_codes_match_error_taxonomy() {
        assert_eq!(
            ServerError::OriginNotAllowed.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServerError::UpgradeRejected("no upgrade header".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::TimestampEncode(encode_error()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn response_body_carries_numeric_code() {
        let response = ServerError::OriginNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read response body");
        };
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("error body is not JSON");
        };
        assert_eq!(
            value.pointer("/error/code").and_then(serde_json::Value::as_u64),
            Some(1001)
        );
        assert_eq!(
            value.pointer("/error/message").and_then(serde_json::Value::as_str),
            Some("origin not allowed")
        );
    }
}
