//! Common error types for the vehicle store

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when operating on the vehicle store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists under the given VIN
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    /// The VIN is syntactically invalid (exceeds the 17-character limit)
    #[error("Invalid VIN format: {0}")]
    InvalidVin(String),
}
