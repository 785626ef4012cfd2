//! Subscriber setup for the `stockroom` binary.
//!
//! Events are written as JSON lines to stderr, leaving stdout to command
//! output. `RUST_LOG` wins; otherwise the caller's default filter applies
//! (the CLI passes `warn`, so only rejected operations and fallbacks show).

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
