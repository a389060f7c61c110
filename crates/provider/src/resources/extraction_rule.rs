//! `sumologic_extraction_rule`: a field extraction rule.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sumologic_client::{ExtractionRule, SumologicClient};
use tracing::debug;

use super::{Resource, decode_state, encode_state, require_id};
use crate::error::Result;
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "sumologic_extraction_rule";

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionRuleState {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub scope: String,
    pub parse_expression: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl From<&ExtractionRuleState> for ExtractionRule {
    fn from(s: &ExtractionRuleState) -> Self {
        ExtractionRule {
            id: s.id.clone(),
            name: s.name.clone(),
            scope: s.scope.clone(),
            parse_expression: s.parse_expression.clone(),
            enabled: s.enabled,
        }
    }
}

impl From<ExtractionRule> for ExtractionRuleState {
    fn from(r: ExtractionRule) -> Self {
        Self {
            id: r.id,
            name: r.name,
            scope: r.scope,
            parse_expression: r.parse_expression,
            enabled: r.enabled,
        }
    }
}

pub struct ExtractionRuleResource;

#[async_trait]
impl Resource for ExtractionRuleResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("A field extraction rule applied to ingested logs")
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("name", Attribute::required_string())
            .with_attribute(
                "scope",
                Attribute::required_string()
                    .with_description("Search scope, e.g. _sourceCategory=web/nginx"),
            )
            .with_attribute(
                "parse_expression",
                Attribute::required_string().with_description("Parse operators to apply"),
            )
            .with_attribute("enabled", Attribute::optional_bool().computed())
    }

    async fn create(&self, client: &SumologicClient, planned: Value) -> Result<Value> {
        let state: ExtractionRuleState = decode_state(planned, TYPE_NAME)?;
        let created = client
            .create_extraction_rule(&ExtractionRule::from(&state))
            .await?;
        encode_state(&ExtractionRuleState::from(created))
    }

    async fn read(&self, client: &SumologicClient, current: Value) -> Result<Option<Value>> {
        let state: ExtractionRuleState = decode_state(current, TYPE_NAME)?;
        let id = require_id(state.id, TYPE_NAME)?;

        match client.get_extraction_rule(&id).await? {
            Some(remote) => Ok(Some(encode_state(&ExtractionRuleState::from(remote))?)),
            None => {
                debug!(id = %id, "Extraction rule gone, dropping from state");
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
        let prior: ExtractionRuleState = decode_state(prior, TYPE_NAME)?;
        let mut planned: ExtractionRuleState = decode_state(planned, TYPE_NAME)?;
        let id = require_id(prior.id, TYPE_NAME)?;

        client
            .update_extraction_rule(&id, &ExtractionRule::from(&planned))
            .await?;
        planned.id = Some(id);
        encode_state(&planned)
    }

    async fn delete(&self, client: &SumologicClient, current: Value) -> Result<()> {
        let state: ExtractionRuleState = decode_state(current, TYPE_NAME)?;
        let id = require_id(state.id, TYPE_NAME)?;
        client.delete_extraction_rule(&id).await?;
        Ok(())
    }
}
