//! Field extraction rule mapper for [`SumologicClient`].
//!
//! # Invariants
//! - Listing follows the `next` token until the API stops returning one.
//! - The rule id is never part of a create or update body.

use tracing::{debug, info};

use crate::client::{SumologicClient, decode};
use crate::error::{ClientError, Result};
use crate::models::{ExtractionRule, ExtractionRuleListResponse};

const EXTRACTION_RULES_PATH: &str = "v1/extractionRules";

/// Page size requested when listing.
const LIST_PAGE_LIMIT: usize = 100;

fn extraction_rule_path(id: &str) -> String {
    format!("{}/{}", EXTRACTION_RULES_PATH, id)
}

fn without_id(rule: &ExtractionRule) -> ExtractionRule {
    ExtractionRule {
        id: None,
        ..rule.clone()
    }
}

impl SumologicClient {
    /// Create an extraction rule and return it with its assigned id.
    pub async fn create_extraction_rule(&self, rule: &ExtractionRule) -> Result<ExtractionRule> {
        let body = self.post(EXTRACTION_RULES_PATH, &without_id(rule)).await?;
        let created: ExtractionRule = decode(&body, "extraction rule")?;

        info!(id = ?created.id, name = %created.name, "Created extraction rule");
        Ok(created)
    }

    /// Get an extraction rule by id. Returns `Ok(None)` if it does not exist.
    pub async fn get_extraction_rule(&self, id: &str) -> Result<Option<ExtractionRule>> {
        match self.get(&extraction_rule_path(id)).await? {
            Some(body) => Ok(Some(decode(&body, "extraction rule")?)),
            None => Ok(None),
        }
    }

    /// List all extraction rules, following pagination.
    pub async fn list_extraction_rules(&self) -> Result<Vec<ExtractionRule>> {
        let mut rules = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let mut query = vec![("limit", LIST_PAGE_LIMIT.to_string())];
            if let Some(t) = token.take() {
                query.push(("token", t));
            }

            let body = self
                .get_with_query(EXTRACTION_RULES_PATH, &query)
                .await?
                .ok_or_else(|| {
                    ClientError::NotFound(format!("collection endpoint {}", EXTRACTION_RULES_PATH))
                })?;
            let page: ExtractionRuleListResponse = decode(&body, "extraction rule list")?;
            debug!(count = page.data.len(), "Fetched extraction rule page");
            rules.extend(page.data);

            match page.next {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => break,
            }
        }

        Ok(rules)
    }

    /// Replace an extraction rule's settings. The id in `rule` is ignored.
    pub async fn update_extraction_rule(&self, id: &str, rule: &ExtractionRule) -> Result<()> {
        self.put(&extraction_rule_path(id), &without_id(rule)).await?;
        info!(id, "Updated extraction rule");
        Ok(())
    }

    /// Delete an extraction rule.
    pub async fn delete_extraction_rule(&self, id: &str) -> Result<()> {
        self.delete(&extraction_rule_path(id)).await?;
        info!(id, "Deleted extraction rule");
        Ok(())
    }
}
