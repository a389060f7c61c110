//! Main Sumologic API client and resource mappers.
//!
//! This module provides [`SumologicClient`]: the raw HTTP verbs
//! (`get`/`post`/`put`/`delete`) plus typed create/get/list/update/delete
//! methods for each entity.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `collectors`: Collector mapper, including lookup by name
//! - `sources`: HTTP source mapper (sources nested under a collector)
//! - `extraction_rules`: Field extraction rule mapper
//!
//! # What this module does NOT handle:
//! - Request sending and status classification (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Single-item getters return `Ok(None)` when the API reports the entity absent.
//! - Update and delete on an absent entity return an error.

pub mod builder;

mod collectors;
mod extraction_rules;
mod sources;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::AccessCredentials;
use crate::endpoints;
use crate::error::{ClientError, Result};

/// Sumologic management API client.
///
/// The client holds no mutable state; it is cheap to clone and safe to
/// share across tasks.
///
/// ```rust,ignore
/// use sumologic_client::{SumologicClient, AccessCredentials, Collector};
/// use secrecy::SecretString;
///
/// let client = SumologicClient::builder()
///     .base_url("https://api.sumologic.com/api".to_string())
///     .credentials(AccessCredentials::new("suABC", SecretString::new("key".into())))
///     .build()?;
///
/// let created = client.create_collector(&Collector::hosted("web-logs")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SumologicClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: AccessCredentials,
}

impl SumologicClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SumologicClientBuilder {
        builder::SumologicClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path`. Returns `Ok(None)` if the API reports it absent.
    pub async fn get(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get_with_etag(path).await?.map(|raw| raw.body))
    }

    /// GET `path`, keeping the response `ETag`.
    pub async fn get_with_etag(&self, path: &str) -> Result<Option<endpoints::RawResponse>> {
        endpoints::get(&self.http, &self.base_url, &self.credentials, path, &[]).await
    }

    /// GET `path` with query parameters.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Vec<u8>>> {
        Ok(
            endpoints::get(&self.http, &self.base_url, &self.credentials, path, query)
                .await?
                .map(|raw| raw.body),
        )
    }

    /// POST `body` as JSON to `path`.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Vec<u8>> {
        endpoints::post(&self.http, &self.base_url, &self.credentials, path, body).await
    }

    /// PUT `body` as JSON to `path`.
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Vec<u8>> {
        endpoints::put(&self.http, &self.base_url, &self.credentials, path, body).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<()> {
        endpoints::delete(&self.http, &self.base_url, &self.credentials, path).await
    }
}

/// Decode a response body, naming what was expected on failure.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
