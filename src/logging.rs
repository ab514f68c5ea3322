//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log output goes to stderr so it never mixes with the rendered display on
//! stdout.
//!
//! # Log Levels
//!
//! - `warn`: failed evaluations, stale outcomes, display write errors
//! - `info`: evaluation requests leaving the calculator
//! - `debug`: every transition that fires

use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter directives: `RUST_LOG` wins, then `-v` flags, then the
/// configured default.
pub fn filter_directives(configured: &str, verbosity: u8) -> String {
    if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !env.trim().is_empty() {
            return env;
        }
    }
    match verbosity {
        0 => configured.to_string(),
        1 => "keypad=info".to_string(),
        2 => "keypad=debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_logging(configured: &str, verbosity: u8) -> bool {
    let directives = filter_directives(configured, verbosity);
    let (filter, rejected) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("warn"), Some(e)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .is_ok();

    if let Some(error) = rejected {
        warn!(%directives, %error, "Invalid log filter, falling back to \"warn\"");
    }
    installed
}
