//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; user-facing output stays on
//! stdout. The filter is read from `PEBBLE_LOG` (e.g. `PEBBLE_LOG=debug`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PEBBLE_LOG";

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("subscriber already installed, keeping it");
    }
}
