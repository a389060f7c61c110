//! Provider block configuration.
//!
//! The host hands the provider block over as JSON. It is decoded into
//! [`ProviderConfig`] and resolved into a [`Config`] through the
//! [`ConfigLoader`], so anything left out of the block falls back to the
//! `SUMOLOGIC_*` environment variables.
//!
//! # Invariants
//! - Values set in the block always beat the environment.
//! - The access key never appears in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use sumologic_config::{Config, ConfigLoader, Environment};

use crate::error::{ProviderError, Result};
use crate::schema::{Attribute, Schema};

/// Typed provider block. Every field is optional here; presence is
/// enforced once the environment has been consulted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    #[serde(default)]
    pub access_id: Option<String>,
    #[serde(default, deserialize_with = "optional_secret")]
    pub access_key: Option<SecretString>,
    /// Deployment name such as `us2` or `eu`.
    #[serde(default)]
    pub environment: Option<String>,
    /// Overrides `environment` when set.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub skip_verify: Option<bool>,
}

fn optional_secret<'de, D>(deserializer: D) -> std::result::Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| SecretString::new(s.into())))
}

impl ProviderConfig {
    /// Decode the provider block. A `null` block is treated as empty.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
            .map_err(|e| ProviderError::Configuration(format!("invalid provider block: {}", e)))
    }

    /// Resolve against the environment and validate.
    pub fn resolve(self) -> Result<Config> {
        let mut loader = ConfigLoader::new();

        if let Some(id) = self.access_id {
            loader = loader.with_access_id(id);
        }
        if let Some(key) = self.access_key {
            loader = loader.with_access_key(key.expose_secret().to_string());
        }
        if let Some(env) = self.environment {
            let env = env
                .parse::<Environment>()
                .map_err(ProviderError::Configuration)?;
            loader = loader.with_environment(env);
        }
        if let Some(url) = self.base_url {
            loader = loader.with_base_url(url);
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        if let Some(skip) = self.skip_verify {
            loader = loader.with_skip_verify(skip);
        }

        Ok(loader.from_env()?.build()?)
    }

    pub fn schema() -> Schema {
        Schema::v0()
            .with_description("Sumologic API connection")
            .with_attribute(
                "access_id",
                Attribute::optional_string()
                    .with_description("Access id. Falls back to SUMOLOGIC_ACCESSID."),
            )
            .with_attribute(
                "access_key",
                Attribute::optional_string()
                    .sensitive()
                    .with_description("Access key. Falls back to SUMOLOGIC_ACCESSKEY."),
            )
            .with_attribute(
                "environment",
                Attribute::optional_string()
                    .with_description("Deployment (us1, us2, eu, au, de, jp, ca, in, fed)."),
            )
            .with_attribute(
                "base_url",
                Attribute::optional_string()
                    .with_description("Full API base URL. Overrides environment."),
            )
            .with_attribute(
                "timeout",
                Attribute::optional_int64().with_description("Request timeout in seconds."),
            )
            .with_attribute("skip_verify", Attribute::optional_bool())
    }
}
