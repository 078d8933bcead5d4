//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fuel API                               │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad JSON / path / query? ── axum rejection ──────────┐                │
//! │         │                                              │                │
//! │         ▼                                              ▼                │
//! │  Service call ── ServiceError ── ErrorKind ─────────► ApiError ───►    │
//! │         │                                              │                │
//! │         ▼                                              ▼                │
//! │  Success ─────────────────────────────►  (status, { success: false,    │
//! │                                                      error: {...} })    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Mapping
//! `NOT_FOUND` is 404, `INTERNAL` is 500, every other code is 400.

use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fuel_core::ErrorKind;
use serde::Serialize;

use crate::services::ServiceError;

/// Message returned for failures that must not leak internals.
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// API error returned from handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "success": false,
///   "error": {
///     "code": "INVALID_ODOMETER",
///     "message": "Odometer cannot decrease. Maximum odometer: 20000, New: 19000"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is absent (400)
    MissingField,

    /// A text field is blank (400)
    EmptyField,

    /// A number is outside its bounds (400)
    OutOfRange,

    /// Vehicle or fuel record does not exist (404)
    NotFound,

    /// Odometer reading breaks the ledger ordering (400)
    InvalidOdometer,

    /// Body, path or query could not be parsed (400)
    InvalidRequest,

    /// Internal server error (500)
    Internal,
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::MissingField => ErrorCode::MissingField,
            ErrorKind::EmptyField => ErrorCode::EmptyField,
            ErrorKind::OutOfRange => ErrorCode::OutOfRange,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InvalidOdometer => ErrorCode::InvalidOdometer,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error with the generic message.
    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, INTERNAL_MESSAGE)
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::MissingField
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidOdometer
            | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts service errors to API errors.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::new(err.kind().into(), err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_request(rejection.body_text())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Response Conversion
// =============================================================================

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: ApiError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            success: false,
            error: self,
        });
        (status, body).into_response()
    }
}

/// Turns a handler panic into a 500 with the generic message.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(detail, "Handler panicked");
    ApiError::internal().into_response()
}

// =============================================================================
// Unit Tests
// =============================================================================
