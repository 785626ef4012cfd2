//! Tracing/logging (shared setup).

/// Initialize process-wide observability with the given default filter.
///
/// `RUST_LOG` overrides the default. Safe to call multiple times; subsequent
/// calls become no-ops.
pub fn init(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
