//! Error types for vehicle registry client operations

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, VehicleClientError>;

/// Errors that can occur during client operations
#[derive(Error, Debug)]
pub enum VehicleClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server rejected the request (400-class single-message errors)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Server rejected the payload with per-field validation messages (422)
    #[error("Validation failed: {0:?}")]
    ValidationRejected(Vec<String>),

    /// No vehicle under the given VIN (404)
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    /// Any other error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
