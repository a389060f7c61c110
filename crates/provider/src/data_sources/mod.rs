//! Read-only lookups of existing remote records.

mod collector;

pub use collector::{CollectorDataSource, CollectorLookup};

use async_trait::async_trait;
use serde_json::Value;
use sumologic_client::SumologicClient;

use crate::error::Result;
use crate::schema::Schema;

/// A data source type the provider can read.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Look the record up from `config` and return its attributes.
    async fn read(&self, client: &SumologicClient, config: Value) -> Result<Value>;
}
