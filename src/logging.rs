//! Log output for the binary.
//!
//! Everything goes to stderr so `--json` output on stdout stays parseable.

use std::io;

use nexastack::config::LogLevel;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `base` raised once per `-v`.
pub fn init(base: LogLevel, verbose: u8) {
    let level = base.raised(verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nexastack={}", level.as_str())));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(verbose > 1)
        .without_time();

    // A second init (tests, embedding) is not an error.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
