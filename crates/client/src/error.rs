//! Error types for the Sumologic client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Sumologic client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API that has no more specific variant.
    #[error("API error ({status}) at {url}: {message}{}", .code.as_ref().map(|c| format!(" [code: {c}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        code: Option<String>,
    },

    /// The credentials were rejected (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The credentials lack permission for the operation (HTTP 403).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The target resource does not exist and the operation requires it.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded.
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No credentials were supplied to the builder.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

impl ClientError {
    /// Check if this error indicates authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::Forbidden(_) | Self::MissingCredentials(_)
        )
    }

    /// Check if this error means the target resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::Unauthorized("bad key".to_string()).is_auth_error());
        assert!(ClientError::Forbidden("no role".to_string()).is_auth_error());
        assert!(!ClientError::NotFound("v1/collectors/1".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(ClientError::NotFound("v1/collectors/1".to_string()).is_not_found());
        assert!(!ClientError::InvalidResponse("eof".to_string()).is_not_found());
    }

    #[test]
    fn test_api_error_display_includes_code() {
        let err = ClientError::ApiError {
            status: 400,
            url: "https://api.sumologic.com/api/v1/collectors".to_string(),
            message: "Name already in use".to_string(),
            code: Some("collectors.validation.name.duplicate".to_string()),
        };
        let display = err.to_string();
        assert!(display.contains("400"));
        assert!(display.contains("Name already in use"));
        assert!(display.contains("[code: collectors.validation.name.duplicate]"));
    }

    #[test]
    fn test_api_error_display_without_code() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://api.sumologic.com/api/v1/collectors".to_string(),
            message: "boom".to_string(),
            code: None,
        };
        assert!(!err.to_string().contains("[code:"));
    }
}
