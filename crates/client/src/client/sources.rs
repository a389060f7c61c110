//! HTTP source mapper for [`SumologicClient`].
//!
//! Sources are addressed through their collector:
//! `v1/collectors/{collector_id}/sources[/{id}]`.

use tracing::info;

use crate::client::{SumologicClient, decode};
use crate::error::{ClientError, Result};
use crate::models::{HttpSource, SourceEnvelope, SourceListResponse};

fn sources_path(collector_id: i64) -> String {
    format!("v1/collectors/{}/sources", collector_id)
}

fn source_path(collector_id: i64, id: i64) -> String {
    format!("{}/{}", sources_path(collector_id), id)
}

impl SumologicClient {
    /// Create an HTTP source under a collector.
    pub async fn create_http_source(
        &self,
        collector_id: i64,
        source: &HttpSource,
    ) -> Result<HttpSource> {
        let request = SourceEnvelope {
            source: source.clone(),
        };
        let body = self.post(&sources_path(collector_id), &request).await?;
        let created: SourceEnvelope = decode(&body, "source")?;

        info!(collector_id, id = ?created.source.id, name = %created.source.name, "Created HTTP source");
        Ok(created.source)
    }

    /// Get an HTTP source. Returns `Ok(None)` if it (or its collector) does not exist.
    pub async fn get_http_source(&self, collector_id: i64, id: i64) -> Result<Option<HttpSource>> {
        match self.get(&source_path(collector_id, id)).await? {
            Some(body) => {
                let envelope: SourceEnvelope = decode(&body, "source")?;
                Ok(Some(envelope.source))
            }
            None => Ok(None),
        }
    }

    /// List the HTTP sources of a collector. Other source types are skipped.
    pub async fn list_http_sources(&self, collector_id: i64) -> Result<Vec<HttpSource>> {
        let path = sources_path(collector_id);
        let body = self
            .get(&path)
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("collector {}", collector_id)))?;
        let list: SourceListResponse = decode(&body, "source list")?;
        Ok(list.sources.into_iter().filter(|s| s.is_http()).collect())
    }

    /// Replace an HTTP source's settings. The id in `source` is ignored.
    pub async fn update_http_source(
        &self,
        collector_id: i64,
        id: i64,
        source: &HttpSource,
    ) -> Result<()> {
        let mut source = source.clone();
        source.id = Some(id);
        let request = SourceEnvelope { source };

        self.put(&source_path(collector_id, id), &request).await?;
        info!(collector_id, id, "Updated HTTP source");
        Ok(())
    }

    /// Delete an HTTP source.
    pub async fn delete_http_source(&self, collector_id: i64, id: i64) -> Result<()> {
        self.delete(&source_path(collector_id, id)).await?;
        info!(collector_id, id, "Deleted HTTP source");
        Ok(())
    }
}
