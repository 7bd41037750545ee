/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `HandlerError` - Errors that occur in HTTP handlers
 * - `StoreError` - Diagram store I/O failures
 * - `SerializationError` - JSON encode/decode failures
 *
 * # Error Policy
 *
 * No error here is fatal to the process: a diagram store failure is surfaced
 * to the caller as a request failure and is not retried; it never terminates
 * the simulation ticker or any active connection.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use relaysim::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// // Create a handler error
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
///
/// // Create a store error
/// let err = BackendError::store("Failed to read diagram file");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Diagram store I/O error
    ///
    /// This error occurs when reading or writing the persisted diagram
    /// document fails. It is surfaced to the caller and not retried.
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StoreError` - 500 Internal Server Error
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StoreError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError { message, .. } => message.clone(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
