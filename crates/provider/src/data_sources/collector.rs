//! `sumologic_collector` data source: find an existing collector by id or name.
//!
//! # Invariants
//! - `id` wins when both `id` and `name` are given; the name is not consulted.
//! - Neither given is a configuration error, raised before any request.
//! - A lookup that finds nothing is an error, not an empty result.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sumologic_client::SumologicClient;
use tracing::debug;

use super::DataSource;
use crate::error::{ProviderError, Result};
use crate::resources::{CollectorState, decode_state, encode_state};
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "sumologic_collector";

/// Lookup keys accepted by the data source. Output attributes the host
/// echoes back on refresh are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectorLookup {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct CollectorDataSource;

#[async_trait]
impl DataSource for CollectorDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("Look up an existing collector by id or name")
            .with_attribute("id", Attribute::optional_int64().computed())
            .with_attribute("name", Attribute::optional_string().computed())
            .with_attribute("description", Attribute::computed_string())
            .with_attribute("category", Attribute::computed_string())
            .with_attribute("timezone", Attribute::computed_string())
    }

    async fn read(&self, client: &SumologicClient, config: Value) -> Result<Value> {
        let lookup: CollectorLookup = decode_state(config, TYPE_NAME)?;

        let found = match (lookup.id, lookup.name.as_deref()) {
            (Some(id), _) => {
                debug!(id, "Looking up collector by id");
                client
                    .get_collector(id)
                    .await?
                    .ok_or_else(|| ProviderError::NotFound(format!("collector with id {}", id)))?
            }
            (None, Some(name)) => {
                debug!(name, "Looking up collector by name");
                client.get_collector_by_name(name).await?.ok_or_else(|| {
                    ProviderError::NotFound(format!("collector with name '{}'", name))
                })?
            }
            (None, None) => {
                return Err(ProviderError::Configuration(
                    "must specify either id or name".to_string(),
                ));
            }
        };

        encode_state(&CollectorState::from(found))
    }
}
