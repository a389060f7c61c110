//! Collector models.

use serde::{Deserialize, Serialize};

/// Collector type accepted by the create endpoint.
pub const HOSTED_COLLECTOR_TYPE: &str = "Hosted";

fn default_collector_type() -> String {
    HOSTED_COLLECTOR_TYPE.to_string()
}

/// A collector.
///
/// `id` is assigned by the API on creation and is `None` before that.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default = "default_collector_type")]
    pub collector_type: String,
    /// Reported by the API only; never sent.
    #[serde(default, skip_serializing)]
    pub alive: Option<bool>,
}

impl Collector {
    /// A hosted collector with only a name set.
    pub fn hosted(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            category: None,
            time_zone: None,
            collector_type: default_collector_type(),
            alive: None,
        }
    }
}

/// Single-collector envelope used by create/get/update.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CollectorEnvelope {
    pub collector: Collector,
}

/// Collector list response.
#[derive(Debug, Deserialize, Clone)]
pub struct CollectorListResponse {
    #[serde(default)]
    pub collectors: Vec<Collector>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector_omits_id_and_alive() {
        let json = serde_json::to_value(Collector::hosted("web-logs")).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("alive").is_none());
        assert_eq!(json["collectorType"], "Hosted");
        assert_eq!(json["name"], "web-logs");
    }

    #[test]
    fn test_decode_api_collector() {
        let body = r#"{
            "id": 42,
            "name": "web-logs",
            "timeZone": "Etc/UTC",
            "collectorType": "Hosted",
            "alive": true,
            "links": [{"rel": "sources", "href": "/v1/collectors/42/sources"}]
        }"#;
        let collector: Collector = serde_json::from_str(body).unwrap();
        assert_eq!(collector.id, Some(42));
        assert_eq!(collector.time_zone.as_deref(), Some("Etc/UTC"));
        assert_eq!(collector.alive, Some(true));
        assert!(collector.description.is_none());
    }
}
