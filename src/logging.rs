//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber using `filter`.
///
/// An unparsable filter falls back to `warn`. Calling this more than once is
/// harmless; only the first subscriber is kept.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
