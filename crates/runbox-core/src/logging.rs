//! Logging initialization
//!
//! Single initialization point for the tracing subscriber. Workflows emit
//! `tracing` events; the CLI decides verbosity once at startup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber
///
/// Called once at process startup; later calls are no-ops. `RUST_LOG`
/// overrides the default filter (`runbox=info`, or `runbox=debug` when
/// `verbose` is set).
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let default_filter = if verbose { "runbox=debug" } else { "runbox=info" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_filter)),
            )
            .with_target(false)
            .init();
    });
}
