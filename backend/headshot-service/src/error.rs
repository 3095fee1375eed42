/// Error types for Headshot Service
///
/// This module defines all error types that can occur in the headshot-service.
/// Errors are converted to appropriate HTTP responses for API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use error_types::ErrorResponse;
use std::fmt;

/// Result type for headshot-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Invalid or missing request parameters
    ValidationError(String),

    /// Team, roster, or image not found
    NotFound(String),

    /// Image bytes could not be decoded
    DecodeError(String),

    /// A batch produced zero usable thumbnails
    AllFailed(String),

    /// Roster or image host unreachable or misbehaving
    Upstream(String),

    /// Internal server error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            AppError::AllFailed(msg) => write!(f, "All downloads failed: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::DecodeError(_) | AppError::AllFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, code) = match self {
            AppError::ValidationError(_) => {
                ("validation_error", error_types::error_codes::VALIDATION_ERROR)
            }
            AppError::NotFound(_) => ("not_found_error", error_types::error_codes::NOT_FOUND),
            AppError::DecodeError(_) => {
                ("server_error", error_types::error_codes::IMAGE_DECODE_FAILED)
            }
            AppError::AllFailed(_) => {
                ("server_error", error_types::error_codes::ALL_DOWNLOADS_FAILED)
            }
            AppError::Upstream(_) => ("upstream_error", error_types::error_codes::UPSTREAM_ERROR),
            AppError::Internal(_) => {
                ("server_error", error_types::error_codes::INTERNAL_SERVER_ERROR)
            }
        };

        let message = self.to_string();
        let response = ErrorResponse::new(
            match status {
                StatusCode::BAD_REQUEST => "Bad Request",
                StatusCode::NOT_FOUND => "Not Found",
                StatusCode::BAD_GATEWAY => "Bad Gateway",
                StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
                _ => "Error",
            },
            &message,
            status.as_u16(),
            error_type,
            code,
        );

        HttpResponse::build(status).json(response)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
