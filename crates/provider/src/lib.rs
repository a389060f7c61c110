//! Sumologic provider: schema declaration, resource and data source
//! registration, and dispatch of host operations onto the API client.
//!
//! ```rust,ignore
//! use sumologic_provider::{SumologicProvider, init_logging};
//! use serde_json::json;
//!
//! init_logging();
//! let provider = SumologicProvider::new();
//! provider.configure(json!({"environment": "us2"})).await?;
//! let collector = provider
//!     .read_data_source("sumologic_collector", json!({"name": "web-logs"}))
//!     .await?;
//! ```

pub mod config;
pub mod data_sources;
pub mod error;
pub mod logging;
pub mod provider;
pub mod resources;
pub mod schema;

pub use config::ProviderConfig;
pub use data_sources::{CollectorDataSource, DataSource};
pub use error::{ProviderError, Result};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::SumologicProvider;
pub use resources::{CollectorResource, ExtractionRuleResource, HttpSourceResource, Resource};
pub use schema::{Attribute, AttributeFlags, AttributeType, ProviderSchema, Schema};
