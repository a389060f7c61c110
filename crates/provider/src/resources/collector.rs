//! `sumologic_collector`: a hosted collector.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sumologic_client::{Collector, SumologicClient};
use tracing::debug;

use super::{Resource, decode_state, encode_state, require_id};
use crate::error::Result;
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "sumologic_collector";

/// Stored state of a collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorState {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl CollectorState {
    fn to_remote(&self) -> Collector {
        Collector {
            id: self.id,
            description: self.description.clone(),
            category: self.category.clone(),
            time_zone: self.timezone.clone(),
            ..Collector::hosted(self.name.clone())
        }
    }
}

impl From<Collector> for CollectorState {
    fn from(c: Collector) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            category: c.category,
            timezone: c.time_zone,
        }
    }
}

pub struct CollectorResource;

#[async_trait]
impl Resource for CollectorResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("A hosted collector")
            .with_attribute("id", Attribute::computed_int64())
            .with_attribute(
                "name",
                Attribute::required_string().with_description("Unique collector name"),
            )
            .with_attribute("description", Attribute::optional_string())
            .with_attribute(
                "category",
                Attribute::optional_string()
                    .with_description("Default _sourceCategory for its sources"),
            )
            .with_attribute(
                "timezone",
                Attribute::optional_string().with_description("IANA time zone, e.g. Etc/UTC"),
            )
    }

    async fn create(&self, client: &SumologicClient, planned: Value) -> Result<Value> {
        let mut state: CollectorState = decode_state(planned, TYPE_NAME)?;
        state.id = None;

        let created = client.create_collector(&state.to_remote()).await?;
        encode_state(&CollectorState::from(created))
    }

    async fn read(&self, client: &SumologicClient, current: Value) -> Result<Option<Value>> {
        let state: CollectorState = decode_state(current, TYPE_NAME)?;
        let id = require_id(state.id, TYPE_NAME)?;

        match client.get_collector(id).await? {
            Some(remote) => Ok(Some(encode_state(&CollectorState::from(remote))?)),
            None => {
                debug!(id, "Collector gone, dropping from state");
                Ok(None)
            }
        }
    }

    async fn update(
        &self,
        client: &SumologicClient,
        prior: Value,
        planned: Value,
    ) -> Result<Value> {
        let prior: CollectorState = decode_state(prior, TYPE_NAME)?;
        let mut planned: CollectorState = decode_state(planned, TYPE_NAME)?;
        let id = require_id(prior.id, TYPE_NAME)?;
        planned.id = Some(id);

        client.update_collector(id, &planned.to_remote()).await?;
        encode_state(&planned)
    }

    async fn delete(&self, client: &SumologicClient, current: Value) -> Result<()> {
        let state: CollectorState = decode_state(current, TYPE_NAME)?;
        client
            .delete_collector(require_id(state.id, TYPE_NAME)?)
            .await?;
        Ok(())
    }
}
