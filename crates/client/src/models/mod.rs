//! Data models for Sumologic API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod collectors;
pub mod common;
pub mod extraction_rules;
pub mod sources;

pub use collectors::{Collector, CollectorEnvelope, CollectorListResponse};
pub use common::{ApiErrorDetail, ApiErrorResponse};
pub use extraction_rules::{ExtractionRule, ExtractionRuleListResponse};
pub use sources::{HttpSource, SourceEnvelope, SourceListResponse};
