//! Source models.
//!
//! Sources live under a collector. Only HTTP sources are modelled; the list
//! endpoint returns every source type, distinguished by `sourceType`.

use serde::{Deserialize, Serialize};

/// `sourceType` value of HTTP sources.
pub const HTTP_SOURCE_TYPE: &str = "HTTP";

fn default_source_type() -> String {
    HTTP_SOURCE_TYPE.to_string()
}

/// An HTTP source: an HTTPS endpoint that accepts log uploads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub message_per_request: bool,
    #[serde(default = "default_source_type")]
    pub source_type: String,
    /// Upload endpoint, assigned by the API.
    #[serde(default, skip_serializing)]
    pub url: Option<String>,
}

impl HttpSource {
    /// An HTTP source with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            category: None,
            message_per_request: false,
            source_type: default_source_type(),
            url: None,
        }
    }

    pub fn is_http(&self) -> bool {
        self.source_type == HTTP_SOURCE_TYPE
    }
}

/// Single-source envelope used by create/get/update.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceEnvelope {
    pub source: HttpSource,
}

/// Source list response.
#[derive(Debug, Deserialize, Clone)]
pub struct SourceListResponse {
    #[serde(default)]
    pub sources: Vec<HttpSource>,
}
