//! Provider registry and operation dispatch.
//!
//! [`SumologicProvider`] maps type names to resources and data sources,
//! owns the API client built by [`SumologicProvider::configure`], and
//! routes each host operation to the right implementation.
//!
//! # Invariants
//! - Unknown type names fail with [`ProviderError::UnknownResource`] whether
//!   or not the provider is configured.
//! - Planned configuration is checked against the resource schema before any
//!   request is sent.
//! - No operation touches the API before `configure` has succeeded.

use std::collections::BTreeMap;

use serde_json::Value;
use sumologic_client::SumologicClient;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::data_sources::{CollectorDataSource, DataSource};
use crate::error::{ProviderError, Result};
use crate::resources::{CollectorResource, ExtractionRuleResource, HttpSourceResource, Resource};
use crate::schema::ProviderSchema;

pub struct SumologicProvider {
    resources: BTreeMap<&'static str, Box<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Box<dyn DataSource>>,
    client: RwLock<Option<SumologicClient>>,
}

impl SumologicProvider {
    /// A provider with every Sumologic resource and data source registered.
    pub fn new() -> Self {
        Self::empty()
            .with_resource(CollectorResource)
            .with_resource(HttpSourceResource)
            .with_resource(ExtractionRuleResource)
            .with_data_source(CollectorDataSource)
    }

    fn empty() -> Self {
        Self {
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
            client: RwLock::new(None),
        }
    }

    pub fn with_resource(mut self, resource: impl Resource + 'static) -> Self {
        self.resources
            .insert(resource.type_name(), Box::new(resource));
        self
    }

    pub fn with_data_source(mut self, data_source: impl DataSource + 'static) -> Self {
        self.data_sources
            .insert(data_source.type_name(), Box::new(data_source));
        self
    }

    /// Use an already-built client instead of calling [`configure`](Self::configure).
    pub fn with_client(self, client: SumologicClient) -> Self {
        Self {
            client: RwLock::new(Some(client)),
            ..self
        }
    }

    pub fn schema(&self) -> ProviderSchema {
        let mut schema = ProviderSchema::new().with_provider_config(ProviderConfig::schema());
        for (name, resource) in &self.resources {
            schema = schema.with_resource(*name, resource.schema());
        }
        for (name, data_source) in &self.data_sources {
            schema = schema.with_data_source(*name, data_source.schema());
        }
        schema
    }

    /// Build the API client from the provider block, falling back to the
    /// environment for anything the block leaves out.
    pub async fn configure(&self, config: Value) -> Result<()> {
        let config = ProviderConfig::from_value(config)?.resolve()?;
        let client = SumologicClient::builder()
            .from_config(&config)
            .build()
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;

        info!(base_url = %client.base_url(), "Configured Sumologic provider");
        *self.client.write().await = Some(client);
        Ok(())
    }

    pub async fn is_configured(&self) -> bool {
        self.client.read().await.is_some()
    }

    pub async fn create(&self, type_name: &str, planned: Value) -> Result<Value> {
        let resource = self.resource(type_name)?;
        resource.schema().validate(&planned)?;
        let client = self.client("create").await?;

        debug!(type_name, "Dispatching create");
        resource.create(&client, planned).await
    }

    /// `Ok(None)` tells the host to drop the resource from state.
    pub async fn read(&self, type_name: &str, current: Value) -> Result<Option<Value>> {
        let resource = self.resource(type_name)?;
        let client = self.client("read").await?;

        debug!(type_name, "Dispatching read");
        resource.read(&client, current).await
    }

    pub async fn update(&self, type_name: &str, prior: Value, planned: Value) -> Result<Value> {
        let resource = self.resource(type_name)?;
        resource.schema().validate(&planned)?;
        let client = self.client("update").await?;

        debug!(type_name, "Dispatching update");
        resource.update(&client, prior, planned).await
    }

    pub async fn delete(&self, type_name: &str, current: Value) -> Result<()> {
        let resource = self.resource(type_name)?;
        let client = self.client("delete").await?;

        debug!(type_name, "Dispatching delete");
        resource.delete(&client, current).await
    }

    pub async fn read_data_source(&self, type_name: &str, config: Value) -> Result<Value> {
        let data_source = self
            .data_sources
            .get(type_name)
            .ok_or_else(|| ProviderError::UnknownResource(format!("data source {}", type_name)))?;
        data_source.schema().validate(&config)?;
        let client = self.client("read_data_source").await?;

        debug!(type_name, "Dispatching data source read");
        data_source.read(&client, config).await
    }

    fn resource(&self, type_name: &str) -> Result<&dyn Resource> {
        self.resources
            .get(type_name)
            .map(|r| r.as_ref())
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    async fn client(&self, operation: &str) -> Result<SumologicClient> {
        self.client
            .read()
            .await
            .clone()
            .ok_or_else(|| ProviderError::NotConfigured(operation.to_string()))
    }
}

impl Default for SumologicProvider {
    fn default() -> Self {
        Self::new()
    }
}
