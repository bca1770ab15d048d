//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with rendered output. The
//! filter comes from `FILMDEX_LOG`, then `RUST_LOG`, then the default level.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FILMDEX_LOG";

/// Default directive when no environment filter is set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "filmdex=debug"
    } else {
        "filmdex=warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Subscriber for tests, writing through the test harness.
#[cfg(any(test, feature = "test_utils"))]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(true))
        .with_test_writer()
        .try_init();
}
