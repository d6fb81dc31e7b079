/**
 * API Error Types
 *
 * This module defines the error type handlers return. Each variant maps to
 * one branch of the error taxonomy:
 *
 * - `MissingToken` - no token header on a protected route (406)
 * - `InvalidToken` - token failed verification (401)
 * - `BadCredentials` - login with unknown user or wrong password (401)
 * - `Validation` - a required field is missing or empty (400)
 * - `NotFound` - the addressed user record does not exist (400)
 * - `Conflict` - email uniqueness violation from the store (409)
 * - `Store` - unexpected store failure, detail passed through (500)
 *
 * No retries anywhere; every error is terminal for the request and is
 * serialized as the JSON error envelope by the `IntoResponse` impl in
 * `conversion.rs`.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced to clients as `{ ok: false, message, ... }`
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token header was present on a protected route
    #[error("No Token received!")]
    MissingToken,

    /// The token was malformed, expired, or signed with a different secret
    #[error("Incorrect Token!")]
    InvalidToken,

    /// Login failed; the same message covers unknown user and wrong
    /// password so the endpoint does not leak which emails exist
    #[error("Incorrect credentials")]
    BadCredentials,

    /// A required field was missing or empty
    #[error("{0}")]
    Validation(String),

    /// The addressed user record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Email uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store failure
    #[error("{message}")]
    Store {
        /// Human-readable message for the envelope
        message: String,
        /// Underlying error detail passed through to the response body
        detail: String,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error (400)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a uniqueness-conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a store error (500), keeping the underlying detail
    pub fn store(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Store {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::NOT_ACCEPTABLE,
            Self::InvalidToken | Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::MissingToken.status_code(),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            ApiError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::BadCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::validation("User needs Password").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("User with Id x doesn't exist").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("Email must be unique").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::store("Error loading Users", "connection reset").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::MissingToken.to_string(), "No Token received!");
        assert_eq!(ApiError::InvalidToken.to_string(), "Incorrect Token!");
        assert_eq!(
            ApiError::validation("User needs Password").to_string(),
            "User needs Password"
        );
        assert_eq!(
            ApiError::store("Error loading Users", "boom").to_string(),
            "Error loading Users"
        );
    }
}
