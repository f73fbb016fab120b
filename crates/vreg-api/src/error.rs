//! API error types and conversions

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vreg_core::StoreError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request (empty body, malformed JSON, invalid VIN format)
    BadRequest(String),
    /// 422 Unprocessable Entity, one message per offending field
    Validation(Vec<String>),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// `{"error": "<message>"}` body used by 400/404/500 responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// `{"errors": [...]}` body used by 422 responses
#[derive(Serialize)]
struct ValidationResponse {
    errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation failures carry a message list, not a single message
        if let ApiError::Validation(errors) = self {
            tracing::debug!(count = errors.len(), "validation rejected");
            let body = Json(ValidationResponse { errors });
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }

        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(_) => unreachable!(), // Handled above
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(%message, "API error");
        } else {
            tracing::debug!(status = status.as_u16(), %message, "API client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound("Vehicle not found".to_string()),
            StoreError::InvalidVin(_) => ApiError::BadRequest("Invalid VIN format".to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Syntactically invalid payload; the test contract greps for
            // the "Malformed JSON" substring.
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                ApiError::BadRequest("Malformed JSON in request body".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::BadRequest(
                "Expected request with Content-Type: application/json".to_string(),
            ),
            _ => ApiError::BadRequest("Failed to read request body".to_string()),
        }
    }
}
