//! Shared error response types
//!
//! Defines the JSON error body returned by every endpoint, so clients can
//! route on `error_type`/`code` without parsing free-form messages.

use serde::{Deserialize, Serialize};

/// Unified API error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error title (e.g. "Not Found")
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// HTTP status code
    pub status: u16,

    /// Error category for client-side routing
    /// Possible values:
    /// - "validation_error" - input validation failed
    /// - "not_found_error" - resource does not exist
    /// - "upstream_error" - a dependency was unreachable or misbehaved
    /// - "server_error" - internal server error
    pub error_type: String,

    /// Stable error code for localization and tracking
    /// Format: SCREAMING_SNAKE, e.g. "TEAM_NOT_FOUND", "IMAGE_DECODE_FAILED"
    pub code: String,

    /// Underlying cause (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Request trace ID for log correlation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,

    /// Timestamp (ISO 8601)
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, status: u16, error_type: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status,
            error_type: error_type.to_string(),
            code: code.to_string(),
            details: None,
            trace_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_trace_id(mut self, trace_id: String) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

/// Standard error codes
pub mod error_codes {
    // Lookups
    pub const NOT_FOUND: &str = "NOT_FOUND";

    // Image pipeline
    pub const IMAGE_DECODE_FAILED: &str = "IMAGE_DECODE_FAILED";
    pub const ALL_DOWNLOADS_FAILED: &str = "ALL_DOWNLOADS_FAILED";

    // Dependencies
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";

    // Generic
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_without_empty_optionals() {
        let response = ErrorResponse::new(
            "Not Found",
            "Team not found",
            404,
            "not_found_error",
            error_codes::NOT_FOUND,
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("details").is_none());
        assert!(json.get("trace_id").is_none());
    }

    #[test]
    fn details_are_attached() {
        let response = ErrorResponse::new(
            "Bad Gateway",
            "roster fetch failed",
            502,
            "upstream_error",
            error_codes::UPSTREAM_ERROR,
        )
        .with_details("connection refused".to_string());

        assert_eq!(response.details.as_deref(), Some("connection refused"));
    }
}
