//! Logging setup for the terminal front end.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Initializes tracing output once at startup.
///
/// The RUST_LOG env var wins over the `--log` flag; output is colored
/// only when attached to a terminal so piped transcripts stay plain.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
