//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for `show` and `export` output.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default`. Calling this twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
