//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ACCESS_ID, ENV_ACCESS_KEY, ENV_BASE_URL, ENV_ENVIRONMENT, ENV_SKIP_VERIFY, ENV_TIMEOUT,
};
use crate::types::Environment;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set on the loader are left untouched. An explicitly set
/// environment also blocks `SUMOLOGIC_BASE_URL`, since either one picks the
/// deployment.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit_environment = loader.environment().is_some();

    if loader.access_id().is_none() {
        loader.set_access_id(env_var_or_none(ENV_ACCESS_ID));
    }
    if !loader.has_access_key() {
        if let Some(key) = env_var_or_none(ENV_ACCESS_KEY) {
            loader.set_access_key(Some(SecretString::new(key.into())));
        }
    }
    if loader.environment().is_none() {
        if let Some(env) = env_var_or_none(ENV_ENVIRONMENT) {
            let parsed: Environment =
                env.parse().map_err(|message| ConfigError::InvalidValue {
                    var: ENV_ENVIRONMENT.to_string(),
                    message,
                })?;
            loader.set_environment(Some(parsed));
        }
    }
    if loader.base_url().is_none() && !explicit_environment {
        loader.set_base_url(env_var_or_none(ENV_BASE_URL));
    }
    if loader.timeout().is_none() {
        if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT.to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            loader.set_timeout(Some(Duration::from_secs(secs)));
        }
    }
    if loader.skip_verify().is_none() {
        if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
            loader.set_skip_verify(Some(skip.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    var: ENV_SKIP_VERIFY.to_string(),
                    message: "must be true or false".to_string(),
                }
            })?));
        }
    }

    Ok(())
}
