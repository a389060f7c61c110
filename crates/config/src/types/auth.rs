//! Credential types for Sumologic configuration.
//!
//! Responsibilities:
//! - Hold the access id / access key pair used for HTTP basic auth.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - The access key is always a `secrecy::SecretString`.
//! - Serialization includes secrets for config persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Access credentials for the Sumologic API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access id (the basic auth username).
    pub access_id: String,
    /// Access key (the basic auth password).
    #[serde(with = "secret_string")]
    pub access_key: SecretString,
}

impl AuthConfig {
    /// Create credentials from an access id and key.
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }
}
