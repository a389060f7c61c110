//! Centralized constants for the Sumologic provider workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Deployment Defaults
// =============================================================================

/// Deployment used when neither an environment nor a base URL is configured.
pub const DEFAULT_ENVIRONMENT: &str = "us1";

/// Domain shared by every Sumologic API deployment.
pub const SUMOLOGIC_API_DOMAIN: &str = "sumologic.com";

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_ACCESS_ID: &str = "SUMOLOGIC_ACCESSID";
pub const ENV_ACCESS_KEY: &str = "SUMOLOGIC_ACCESSKEY";
pub const ENV_ENVIRONMENT: &str = "SUMOLOGIC_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "SUMOLOGIC_BASE_URL";
pub const ENV_TIMEOUT: &str = "SUMOLOGIC_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "SUMOLOGIC_SKIP_VERIFY";
