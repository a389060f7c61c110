//! Sumologic REST API client.
//!
//! This crate provides a type-safe client for the Sumologic management API:
//! a thin authenticated HTTP layer (`get`/`post`/`put`/`delete` returning raw
//! response bytes) and per-entity mappers for collectors, HTTP sources and
//! field extraction rules built on top of it.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AccessCredentials;
pub use client::SumologicClient;
pub use client::builder::SumologicClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ApiErrorResponse, Collector, CollectorListResponse, ExtractionRule,
    ExtractionRuleListResponse, HttpSource, SourceListResponse,
};
