//! Connection configuration types for the Sumologic provider.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `base_url` never carries a trailing slash.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::auth::AuthConfig;
use crate::types::environment::Environment;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Sumologic API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.sumologic.com/api)
    pub base_url: String,
    /// Whether to skip TLS verification (for test proxies only)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Connection settings for a deployment, with default timeout.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Credentials
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config targeting an explicit base URL.
    pub fn with_base_url(base_url: String, access_id: String, access_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig::new(access_id, access_key),
        }
    }

    /// Create a config targeting a deployment.
    pub fn with_environment(
        environment: Environment,
        access_id: String,
        access_key: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig::for_environment(environment),
            auth: AuthConfig::new(access_id, access_key),
        }
    }
}
