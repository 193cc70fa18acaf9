//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use resq_core::config::ObservabilityConfig;
use resq_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Build the filter: `RESQ_LOG` when set and valid, otherwise the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize the global subscriber.
///
/// Reads `RESQ_LOG` for per-crate levels, e.g.
/// `RESQ_LOG=resq_triage=debug,resq_gesture=trace`.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = build_filter(config);
    let json = config.json;
    INIT.call_once(move || {
        let registry = tracing_subscriber::registry().with(filter);
        if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .init();
        }
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(move || {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_test_writer())
            .init();
    });
}
