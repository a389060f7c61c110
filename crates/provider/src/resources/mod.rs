//! Managed resources.
//!
//! Each resource maps its typed state onto one client mapper. State crosses
//! the provider boundary as `serde_json::Value`; [`decode_state`] is where it
//! becomes typed, and a shape mismatch there is a validation error.
//!
//! # Invariants
//! - `read` returns `Ok(None)` when the remote record is gone.
//! - `update` and `delete` use the id held in prior state, never one from
//!   configuration, and fail if the remote record is gone.

mod collector;
mod extraction_rule;
mod http_source;

pub use collector::{CollectorResource, CollectorState};
pub use extraction_rule::{ExtractionRuleResource, ExtractionRuleState};
pub use http_source::{HttpSourceResource, HttpSourceState};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sumologic_client::SumologicClient;

use crate::error::{ProviderError, Result};
use crate::schema::Schema;

/// A resource type the provider can manage.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name as written in configuration, e.g. `sumologic_collector`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Create the remote record and return the state to store.
    async fn create(&self, client: &SumologicClient, planned: Value) -> Result<Value>;

    /// Refresh state. `Ok(None)` means the record no longer exists.
    async fn read(&self, client: &SumologicClient, current: Value) -> Result<Option<Value>>;

    async fn update(&self, client: &SumologicClient, prior: Value, planned: Value)
    -> Result<Value>;

    async fn delete(&self, client: &SumologicClient, current: Value) -> Result<()>;
}

/// Decode boundary JSON into a typed state.
pub(crate) fn decode_state<T: DeserializeOwned>(value: Value, type_name: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ProviderError::Validation(format!("{}: {}", type_name, e)))
}

pub(crate) fn encode_state<T: Serialize>(state: &T) -> Result<Value> {
    Ok(serde_json::to_value(state)?)
}

/// The id recorded in state, which every operation after create needs.
pub(crate) fn require_id<T>(id: Option<T>, type_name: &str) -> Result<T> {
    id.ok_or_else(|| ProviderError::Validation(format!("{}: state has no id", type_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn test_decode_state_shape_mismatch_is_validation() {
        let err = decode_state::<Sample>(json!({"name": 5}), "sample").unwrap_err();
        match err {
            ProviderError::Validation(msg) => assert!(msg.starts_with("sample: "), "{}", msg),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(Some(3), "x").unwrap(), 3);
        assert!(matches!(
            require_id::<i64>(None, "x"),
            Err(ProviderError::Validation(_))
        ));
    }
}
