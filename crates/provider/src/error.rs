//! Error types for the provider layer.

use sumologic_client::ClientError;
use sumologic_config::ConfigError;
use thiserror::Error;

/// Errors surfaced to the host by provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider or data source configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resource or data source input failed schema or type validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A remote record the operation requires does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The requested resource or data source type is not registered.
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// An operation was dispatched before `configure` succeeded.
    #[error("Provider not configured: call configure before {0}")]
    NotConfigured(String),

    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// State could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// True when the error means the remote record is gone, whichever layer noticed.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Client(err) => err.is_not_found(),
            _ => false,
        }
    }
}

impl From<ConfigError> for ProviderError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
