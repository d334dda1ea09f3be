//! Logging setup.
//!
//! Call sites use the `log` macros; the `tracing-subscriber` formatter picks
//! them up through its `tracing-log` bridge.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,hyper=warn,h2=warn";

/// Builds the filter, preferring `RUST_LOG` over the configured directive.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call twice; the second call is ignored.
pub fn init(configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_target(false)
        .try_init();
}
