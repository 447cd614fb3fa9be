//! Tracing subscriber setup shared by the healthlog binaries.
//!
//! Log lines go to stderr; stdout carries the rendered list, charts and
//! recommendation.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used by [`init`] when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: &str = "info";

/// Install the subscriber at [`DEFAULT_LEVEL`]
///
/// `RUST_LOG` takes precedence when set.
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Install the subscriber at `default_level` (e.g. "warn", "debug")
///
/// `RUST_LOG` takes precedence when set. Panics if a global subscriber is
/// already installed.
pub fn init_with_level(default_level: &str) {
    tracing_subscriber::registry()
        .with(filter_for(default_level))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn filter_for(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Route logs through the test harness at debug level; repeat calls are no-ops
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
