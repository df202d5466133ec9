//! Development-time tracing for debugging sentinel.
//!
//! Progress events (`rules loaded`, `tests generated`, ...) and non-fatal
//! advisories (branch check skipped outside a repository, degraded rules
//! parse) go through `tracing`. Generated output itself is printed to
//! stdout by the CLI and is unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=sentinel=debug cargo run -- create "add login"
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
