/**
 * API Error Types
 *
 * This module defines the error types returned by HTTP handlers.
 * Each variant maps to an HTTP status code and a human-readable
 * message; the mapping is implemented in `conversion.rs`.
 *
 * # Error Categories
 *
 * ## Not-found errors
 *
 * Domain lookups that come up empty: an invitation code that does not
 * exist or was consumed before being linked to a couple, or a ceremony
 * action against a couple that never ran `/ceremony/init`.
 *
 * ## Unavailability
 *
 * The server boots without a database when `DATABASE_URL` is missing
 * or unreachable; data handlers report that condition as 503 rather
 * than panicking.
 *
 * ## Storage errors
 *
 * Every other `sqlx::Error` propagates untranslated as a 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while handling an API request
///
/// # Usage
///
/// ```rust
/// use shaadiverse::error::ApiError;
///
/// // A domain lookup failed
/// let err = ApiError::not_found("Invalid or used code");
///
/// // The database pool is not configured
/// let err = ApiError::unavailable();
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A domain entity was not found (404)
    #[error("Not found: {message}")]
    NotFound {
        /// Short message surfaced to the caller
        message: String,
    },

    /// The database is not configured or unreachable (503)
    #[error("Database not configured")]
    Unavailable,

    /// A storage operation failed (500)
    ///
    /// Passed through without domain-specific translation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a not-found error with a short message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unavailable error (database pool missing)
    pub fn unavailable() -> Self {
        Self::Unavailable
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Unavailable` - 503 Service Unavailable
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message surfaced in the response body
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message } => message.clone(),
            Self::Unavailable => "Database not configured".to_string(),
            Self::Database(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_found_error() {
        let error = ApiError::not_found("Invalid or used code");
        match error {
            ApiError::NotFound { ref message } => {
                assert_eq!(message, "Invalid or used code");
            }
            _ => panic!("Expected NotFound"),
        }
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unavailable_error() {
        let error = ApiError::unavailable();
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_error_status() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::not_found("No ceremony state");
        assert_eq!(error.message(), "No ceremony state");
    }
}
