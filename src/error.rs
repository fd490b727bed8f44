// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::remote::RemoteError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidJson(String),

    // 403 Forbidden
    Forbidden(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // Any status relayed from the remote API
    Upstream { status: StatusCode, message: String },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidJson(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::Upstream { message, .. } => message,
        }
    }

    /// Convert to JSON response body. Every failure has the same shape.
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    /// Translate a failed remote call into the response sent to the caller.
    ///
    /// A completed call whose error body carries a string `message` keeps the
    /// upstream status and message. Everything else (transport failures,
    /// bodies without a message) becomes a 500 with `default_message`, so
    /// internal detail never reaches the caller.
    pub fn from_remote(err: &RemoteError, default_message: impl Into<String>) -> Self {
        if let RemoteError::Upstream { status, body } = err {
            if let Some(message) = body.get("message").and_then(Value::as_str) {
                return ApiError::Upstream {
                    status: *status,
                    message: message.to_string(),
                };
            }
        }
        ApiError::internal_server_error(default_message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
