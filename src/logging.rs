//! Diagnostic logging setup
//!
//! Traces go to stderr and stay suppressed unless debug mode is
//! enabled. `RUST_LOG` in the environment always takes precedence over
//! the resolved flag.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide subscriber.
///
/// Later calls are no-ops; the first subscriber wins.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
