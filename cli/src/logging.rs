//! Diagnostic logging via `tracing`.
//!
//! User-facing progress goes through `ProgressReporter`; this is the
//! developer-facing stream on stderr. `RUST_LOG` overrides the verbosity
//! flags.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count.
#[must_use]
pub fn directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("warn,zbx_provision={level}")
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
