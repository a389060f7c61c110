//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, whatever the call order.
//! - An explicit base URL takes precedence over the deployment environment.
//! - Every field is tracked as an `Option` until `build()`, so "unset" and
//!   "set to a default-looking value" are never confused.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, Environment};

/// Configuration loader that builds config from overrides and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    access_id: Option<String>,
    access_key: Option<SecretString>,
    environment: Option<Environment>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Fill unset values from `SUMOLOGIC_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the access id.
    pub fn with_access_id(mut self, access_id: String) -> Self {
        self.access_id = Some(access_id);
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: String) -> Self {
        self.access_key = Some(SecretString::new(access_key.into()));
        self
    }

    /// Set the deployment environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set an explicit API base URL (overrides the environment).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let access_id = self
            .access_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingAccessId)?;
        let access_key = self.access_key.ok_or(ConfigError::MissingAccessKey)?;

        let base_url = match self.base_url {
            Some(raw) => validate_and_normalize_base_url(&raw)?,
            None => self.environment.unwrap_or_default().base_url(),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig::new(access_id, access_key),
        })
    }

    /// Timeout must be within 1..=MAX_TIMEOUT_SECS seconds.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let timeout_secs = timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn access_id(&self) -> Option<&String> {
        self.access_id.as_ref()
    }

    pub(crate) fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub(crate) fn environment(&self) -> Option<Environment> {
        self.environment
    }

    pub(crate) fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn skip_verify(&self) -> Option<bool> {
        self.skip_verify
    }

    pub(crate) fn set_access_id(&mut self, access_id: Option<String>) {
        self.access_id = access_id;
    }

    pub(crate) fn set_access_key(&mut self, access_key: Option<SecretString>) {
        self.access_key = access_key;
    }

    pub(crate) fn set_environment(&mut self, environment: Option<Environment>) {
        self.environment = environment;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.sumologic.com/api): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.sumologic.com/api)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
