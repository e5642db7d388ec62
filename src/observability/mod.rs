//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! table and JSON output. The `SHELFSCOPE_LOG` environment variable takes
//! an `EnvFilter` directive and overrides the `-v` count:
//!
//! ```text
//! (none) -> warn
//! -v     -> info
//! -vv    -> debug
//! -vvv   -> trace
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "SHELFSCOPE_LOG";

/// Filter directive for a `-v` count.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbosity, "Logging initialized");
    }
}
