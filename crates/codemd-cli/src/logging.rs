//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level directive for the given verbosity
#[must_use]
pub const fn log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Filter used by [`setup_logging`]
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(log_level(verbose))
}

/// Install the global subscriber. The fmt layer writes to stdout, which
/// also carries the per-file skip diagnostics.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(verbose))
        .init();
}
