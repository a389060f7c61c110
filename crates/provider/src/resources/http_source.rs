//! `sumologic_http_source`: an HTTP upload endpoint on a collector.
//!
//! The owning collector is part of the address, so changing `collector_id`
//! means a new source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sumologic_client::{HttpSource, SumologicClient};
use tracing::debug;

use super::{Resource, decode_state, encode_state, require_id};
use crate::error::Result;
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "sumologic_http_source";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSourceState {
    #[serde(default)]
    pub id: Option<i64>,
    pub collector_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub message_per_request: bool,
    /// Upload URL assigned by the API.
    #[serde(default)]
    pub url: Option<String>,
}

impl HttpSourceState {
    fn to_remote(&self) -> HttpSource {
        HttpSource {
            id: self.id,
            description: self.description.clone(),
            category: self.category.clone(),
            message_per_request: self.message_per_request,
            ..HttpSource::new(self.name.clone())
        }
    }

    fn from_remote(collector_id: i64, s: HttpSource) -> Self {
        Self {
            id: s.id,
            collector_id,
            name: s.name,
            description: s.description,
            category: s.category,
            message_per_request: s.message_per_request,
            url: s.url,
        }
    }
}

pub struct HttpSourceResource;

#[async_trait]
impl Resource for HttpSourceResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("An HTTP source receiving logs over HTTPS POST")
            .with_attribute("id", Attribute::computed_int64())
            .with_attribute(
                "collector_id",
                Attribute::required_int64()
                    .with_description("Id of the owning collector")
                    .with_force_new(),
            )
            .with_attribute("name", Attribute::required_string())
            .with_attribute("description", Attribute::optional_string())
            .with_attribute("category", Attribute::optional_string())
            .with_attribute(
                "message_per_request",
                Attribute::optional_bool()
                    .with_description("Treat each request body as one message"),
            )
            .with_attribute(
                "url",
                Attribute::computed_string()
                    .sensitive()
                    .with_description("Upload endpoint"),
            )
    }

    async fn create(&self, client: &SumologicClient, planned: Value) -> Result<Value> {
        let mut state: HttpSourceState = decode_state(planned, TYPE_NAME)?;
        state.id = None;

        let created = client
            .create_http_source(state.collector_id, &state.to_remote())
            .await?;
        encode_state(&HttpSourceState::from_remote(state.collector_id, created))
    }

    async fn read(&self, client: &SumologicClient, current: Value) -> Result<Option<Value>> {
        let state: HttpSourceState = decode_state(current, TYPE_NAME)?;
        let id = require_id(state.id, TYPE_NAME)?;

        match client.get_http_source(state.collector_id, id).await? {
            Some(remote) => Ok(Some(encode_state(&HttpSourceState::from_remote(
                state.collector_id,
                remote,
            ))?)),
            None => {
                debug!(
                    collector_id = state.collector_id,
                    id, "HTTP source gone, dropping from state"
                );
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
        let prior: HttpSourceState = decode_state(prior, TYPE_NAME)?;
        let mut planned: HttpSourceState = decode_state(planned, TYPE_NAME)?;
        let id = require_id(prior.id, TYPE_NAME)?;
        planned.id = Some(id);
        planned.collector_id = prior.collector_id;
        if planned.url.is_none() {
            planned.url = prior.url;
        }

        client
            .update_http_source(planned.collector_id, id, &planned.to_remote())
            .await?;
        encode_state(&planned)
    }

    async fn delete(&self, client: &SumologicClient, current: Value) -> Result<()> {
        let state: HttpSourceState = decode_state(current, TYPE_NAME)?;
        client
            .delete_http_source(state.collector_id, require_id(state.id, TYPE_NAME)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_remote_never_sends_url() {
        let state: HttpSourceState = serde_json::from_value(json!({
            "collector_id": 42,
            "name": "nginx",
            "url": "https://collectors.sumologic.com/receiver/v1/http/abc"
        }))
        .unwrap();
        let body = serde_json::to_value(state.to_remote()).unwrap();
        assert!(body.get("url").is_none());
        assert_eq!(body["sourceType"], "HTTP");
    }

    #[test]
    fn test_collector_id_forces_replacement() {
        let schema = HttpSourceResource.schema();
        assert!(schema.attributes["collector_id"].force_new);
        assert!(schema.attributes["url"].flags.sensitive);
    }
}
