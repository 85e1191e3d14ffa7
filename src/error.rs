//! Error types for graph-cards.
//!
//! Two error enums live here: [`GraphError`] for the Graph client and its
//! configuration, and [`CardError`] for building card objects from plain
//! JSON values.
//!
//! # Propagation
//!
//! The Graph client does not recover from failures. Transport errors, non-2xx
//! responses and JSON decoding failures are wrapped once and handed to the
//! caller with the original cause attached.
//!
//! # Security
//!
//! Response bodies may echo request headers back. Use [`GraphError::sanitize_message`]
//! before logging anything that came from the server.

use thiserror::Error;

/// Unified error type for configuration and Graph API operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, usually a Graph `error` object.
        body: String,
    },

    /// A header name or value could not be encoded.
    #[error("invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name as supplied.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Parameters could not be turned into a data bag.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GraphError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        GraphError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        GraphError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        GraphError::Validation(message.into())
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        GraphError::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status if the server answered with a non-success code.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            GraphError::HttpStatus { status, .. } => Some(*status),
            GraphError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    ///
    /// Used on response bodies and transport errors before they reach a log
    /// line. An empty secret leaves the message untouched.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Display message with `secret` redacted.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}

/// Errors raised while converting plain JSON into card objects.
#[derive(Error, Debug)]
pub enum CardError {
    /// The input was not a JSON object.
    #[error("expected a JSON object for {expected}, got {found}")]
    NotAnObject {
        /// The card type being built.
        expected: &'static str,
        /// JSON kind that was supplied instead.
        found: &'static str,
    },

    /// The `type` key names a different card type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Discriminator of the target type.
        expected: &'static str,
        /// Discriminator present in the input.
        found: String,
    },

    /// The object did not match the target shape.
    #[error("invalid card JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Returns a short name for the JSON kind of `value`.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = GraphError::missing_env("GRAPH_ACCESS_TOKEN");
        assert!(err.to_string().contains("GRAPH_ACCESS_TOKEN"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = GraphError::validation("params must serialize to an object");
        assert_eq!(
            err.to_string(),
            "validation error: params must serialize to an object"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = GraphError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: r#"{"error":{"code":"ErrorItemNotFound"}}"#.to_string(),
        };
        assert!(err.to_string().starts_with("HTTP 404"));
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_status_absent_for_config_errors() {
        assert!(GraphError::invalid_config("bad").status().is_none());
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "eyJ0eXAiOiJKV1QiLCJub25jZSI6";
        let message = format!("Authorization: Bearer {} rejected", token);
        let sanitized = GraphError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitized_display_redacts_token() {
        let token = "eyJ0eXAiOiJKV1QiLCJub25jZSI6";
        let err = GraphError::invalid_header("Authorization", format!("Bearer {} has a newline", token));
        let display = err.sanitized_display(token);
        assert_eq!(display, "invalid header Authorization: Bearer [REDACTED] has a newline");
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        assert_eq!(GraphError::sanitize_message(message, ""), message);
    }

    #[test]
    fn test_invalid_header_error() {
        let err = GraphError::invalid_header("If-Match", "contains a newline");
        let msg = err.to_string();
        assert!(msg.contains("If-Match"));
        assert!(msg.contains("newline"));
    }

    #[test]
    fn test_card_type_mismatch_display() {
        let err = CardError::TypeMismatch {
            expected: "TextBlock",
            found: "Image".to_string(),
        };
        assert_eq!(err.to_string(), "type mismatch: expected TextBlock, found Image");
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!([1])), "array");
        assert_eq!(json_kind(&serde_json::json!("x")), "string");
        assert_eq!(json_kind(&serde_json::Value::Null), "null");
    }
}
