//! Debug logging setup.
//!
//! Nothing is installed unless the `debug` parameter is on, so by default
//! every `tracing` event is discarded. When enabled, events go to stderr,
//! where the cluster manager's executor collects them.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "debug";

/// Install the stderr subscriber if `enabled`.
///
/// A subscriber that is already installed, or fails to install, is not an
/// error: logging must never change the outcome of an action.
pub fn init(enabled: bool) {
    if !enabled {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Span that tags every event of this invocation with the pool name.
#[must_use]
pub fn pool_span(pool: &str) -> tracing::Span {
    tracing::info_span!("zpool_agent", pool)
}
