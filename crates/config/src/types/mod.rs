//! Configuration type definitions for the Sumologic provider.
//!
//! Responsibilities:
//! - Define configuration types for credentials, connection and deployment.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables or `.env` files (see `loader` module).
//! - Actual network connections or request signing (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;
mod environment;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use environment::Environment;
