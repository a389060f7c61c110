//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so the host environment cannot leak in.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 7] {
    [
        ("SUMOLOGIC_ACCESSID", None),
        ("SUMOLOGIC_ACCESSKEY", None),
        ("SUMOLOGIC_ENVIRONMENT", None),
        ("SUMOLOGIC_BASE_URL", None),
        ("SUMOLOGIC_TIMEOUT", None),
        ("SUMOLOGIC_SKIP_VERIFY", None),
        ("DOTENV_DISABLED", Some("1")),
    ]
}
