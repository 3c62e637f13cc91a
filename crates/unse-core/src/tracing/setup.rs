//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::DEFAULT_LOG_LEVEL;

static INIT: Once = Once::new();

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "UNSE_LOG";

/// Initialize tracing with the default `unse=info` filter.
///
/// Reads `UNSE_LOG` for per-crate levels, e.g.
/// `UNSE_LOG=unse_calendar=debug,unse_astro=warn`.
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_LEVEL);
}

/// Initialize tracing at the `[observability] log_level` of an engine config.
pub fn init_tracing_from(config: &ObservabilityConfig) {
    init_tracing_with_default(&config.log_level);
}

/// Initialize tracing, using `level` for the `unse` crates when `UNSE_LOG`
/// is unset or invalid.
pub fn init_tracing_with_default(level: &str) {
    let fallback = default_directive(level);
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        // try_init: a host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Filter directive applying `level` to every `unse` crate.
pub fn default_directive(level: &str) -> String {
    ["unse_core", "unse_astro", "unse_saju", "unse_scoring", "unse_calendar"]
        .iter()
        .map(|krate| format!("{krate}={}", level.trim()))
        .collect::<Vec<_>>()
        .join(",")
}
