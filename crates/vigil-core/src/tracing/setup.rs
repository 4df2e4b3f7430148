//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Vigil tracing/logging system with default settings.
///
/// Reads the `VIGIL_LOG` environment variable for per-module log levels.
/// Format: `VIGIL_LOG=vigil_classifier=debug,vigil_core=info`
///
/// Falls back to `vigil=info` if `VIGIL_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&LoggingConfig::default());
}

/// Initialize tracing from a [`LoggingConfig`]. `VIGIL_LOG` still wins over
/// the configured level when it is set.
pub fn init_tracing_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let fallback = format!("vigil={}", config.effective_level());
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        if config.effective_json() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        }
    });
}
