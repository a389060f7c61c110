//! Field extraction rule models.
//!
//! Unlike collectors and sources these endpoints are not enveloped, and the
//! list endpoint is paginated with an opaque `next` token.

use serde::{Deserialize, Serialize};

/// A field extraction rule.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Search scope the rule applies to, e.g. `_sourceCategory=web`.
    pub scope: String,
    pub parse_expression: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// One page of extraction rules.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionRuleListResponse {
    #[serde(default)]
    pub data: Vec<ExtractionRule>,
    #[serde(default)]
    pub next: Option<String>,
}
