//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::FieldErrors;
use thiserror::Error;

/// Errors raised by a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given id exists
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be encoded or decoded
    #[error("Store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing document is readable but inconsistent
    #[error("Store data is corrupt: {0}")]
    Corrupt(String),
}

/// Errors returned by the contact service to the API layer.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The candidate contact failed one or more field rules
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The target contact does not exist
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The store failed unexpectedly
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

/// Errors that can occur when calling the contacts API over HTTP.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The server rejected the candidate contact
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an unexpected error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ApiClientError
pub type ApiClientResult<T> = Result<T, ApiClientError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
