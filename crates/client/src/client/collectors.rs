//! Collector mapper for [`SumologicClient`].
//!
//! # What this module handles:
//! - Creating, reading, listing, updating and deleting collectors
//! - Looking a collector up by exact name
//!
//! # Invariants
//! - Name lookup is a linear scan of the full collector list. Collector
//!   inventories are administrative and small.

use tracing::info;

use crate::client::{SumologicClient, decode};
use crate::error::{ClientError, Result};
use crate::models::{Collector, CollectorEnvelope, CollectorListResponse};

const COLLECTORS_PATH: &str = "v1/collectors";

fn collector_path(id: i64) -> String {
    format!("{}/{}", COLLECTORS_PATH, id)
}

impl SumologicClient {
    /// Create a collector and return it with its assigned id.
    pub async fn create_collector(&self, collector: &Collector) -> Result<Collector> {
        let request = CollectorEnvelope {
            collector: collector.clone(),
        };
        let body = self.post(COLLECTORS_PATH, &request).await?;
        let created: CollectorEnvelope = decode(&body, "collector")?;

        info!(id = ?created.collector.id, name = %created.collector.name, "Created collector");
        Ok(created.collector)
    }

    /// Get a collector by id. Returns `Ok(None)` if it does not exist.
    pub async fn get_collector(&self, id: i64) -> Result<Option<Collector>> {
        match self.get(&collector_path(id)).await? {
            Some(body) => {
                let envelope: CollectorEnvelope = decode(&body, "collector")?;
                Ok(Some(envelope.collector))
            }
            None => Ok(None),
        }
    }

    /// List all collectors.
    pub async fn list_collectors(&self) -> Result<Vec<Collector>> {
        let body = self.get(COLLECTORS_PATH).await?.ok_or_else(|| {
            ClientError::NotFound(format!("collection endpoint {}", COLLECTORS_PATH))
        })?;
        let list: CollectorListResponse = decode(&body, "collector list")?;
        Ok(list.collectors)
    }

    /// Find the collector whose name matches exactly. Returns `Ok(None)` if none does.
    pub async fn get_collector_by_name(&self, name: &str) -> Result<Option<Collector>> {
        Ok(self
            .list_collectors()
            .await?
            .into_iter()
            .find(|c| c.name == name))
    }

    /// Replace a collector's settings. The id in `collector` is ignored.
    pub async fn update_collector(&self, id: i64, collector: &Collector) -> Result<()> {
        let mut collector = collector.clone();
        collector.id = Some(id);
        let request = CollectorEnvelope { collector };

        self.put(&collector_path(id), &request).await?;
        info!(id, "Updated collector");
        Ok(())
    }

    /// Delete a collector.
    pub async fn delete_collector(&self, id: i64) -> Result<()> {
        self.delete(&collector_path(id)).await?;
        info!(id, "Deleted collector");
        Ok(())
    }
}
