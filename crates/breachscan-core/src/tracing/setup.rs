//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the breachscan tracing/logging system.
///
/// Reads the `BREACHSCAN_LOG` environment variable for per-subsystem
/// log levels. Format: `BREACHSCAN_LOG=ingest=debug,classify=info`
///
/// Falls back to `breachscan=info` if `BREACHSCAN_LOG` is not set or
/// is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BREACHSCAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("breachscan=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
