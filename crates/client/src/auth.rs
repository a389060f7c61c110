//! Access credentials.
//!
//! Sumologic authenticates every management API call with HTTP basic auth
//! using an access id / access key pair. There is no session to manage.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Access id / access key pair used for HTTP basic auth.
#[derive(Debug, Clone)]
pub struct AccessCredentials {
    access_id: String,
    access_key: SecretString,
}

impl AccessCredentials {
    /// Create credentials from an access id and key.
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }

    /// The access id (not secret).
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// Attach basic auth to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.access_id, Some(self.access_key.expose_secret()))
    }
}
