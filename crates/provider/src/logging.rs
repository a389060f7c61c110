//! Structured logging setup for hosts embedding the provider.
//!
//! Logs go to **stderr**; stdout belongs to the host protocol. Filtering
//! follows `RUST_LOG` (e.g. `sumologic_client=debug` to see every API call).

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LEVEL: &str = "info";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    )
}

/// Install the global subscriber at `info` unless `RUST_LOG` says otherwise.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default(DEFAULT_LEVEL);
}

/// Like [`init_logging`] with a different fallback level.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    subscriber(filter(default_level)).init();
}

/// Install the global subscriber, returning `false` if one was already set.
pub fn try_init_logging() -> bool {
    subscriber(filter(DEFAULT_LEVEL)).try_init().is_ok()
}
