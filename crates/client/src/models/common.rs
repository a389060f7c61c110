//! Shared response shapes.

use serde::Deserialize;

/// Error body returned by the API on non-success responses.
///
/// Older endpoints return `code`/`message` at the top level; newer ones
/// return an `errors` array. Both shapes decode into this struct.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiErrorResponse {
    /// First error code present, top-level first.
    pub fn code(&self) -> Option<String> {
        self.code
            .clone()
            .or_else(|| self.errors.first().map(|e| e.code.clone()))
    }

    /// Human-readable message, or `None` if the body carried none.
    pub fn message(&self) -> Option<String> {
        if let Some(message) = &self.message {
            return Some(message.clone());
        }
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_shape() {
        let body = r#"{"status":404,"id":"ABC","code":"collectors.collector.invalid","message":"Invalid collector ID."}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code().as_deref(), Some("collectors.collector.invalid"));
        assert_eq!(parsed.message().as_deref(), Some("Invalid collector ID."));
    }

    #[test]
    fn test_errors_array_shape() {
        let body = r#"{"id":"XYZ","errors":[{"code":"fer:invalid_scope","message":"bad scope"},{"code":"fer:invalid_name","message":"bad name"}]}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code().as_deref(), Some("fer:invalid_scope"));
        assert_eq!(parsed.message().as_deref(), Some("bad scope; bad name"));
    }

    #[test]
    fn test_empty_object_has_no_message() {
        let parsed: ApiErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.message().is_none());
        assert!(parsed.code().is_none());
    }
}
