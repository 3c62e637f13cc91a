use std::sync::Mutex;

use unse_core::config::EngineConfig;
use unse_core::tracing::setup::{
    default_directive, init_tracing, init_tracing_from, init_tracing_with_default, LOG_ENV_VAR,
};

/// Serializes tests that touch the environment.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_with_env_filter_does_not_panic() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "unse_calendar=debug,unse_astro=warn");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with_default("debug");
    init_tracing();
}

#[test]
fn configured_log_level_reaches_every_crate() {
    let config = EngineConfig::from_toml("[observability]\nlog_level = \"debug\"").unwrap();
    let directive = default_directive(&config.observability.log_level);
    assert_eq!(
        directive,
        "unse_core=debug,unse_astro=debug,unse_saju=debug,unse_scoring=debug,unse_calendar=debug"
    );
    assert_eq!(default_directive(" warn "), default_directive("warn"));

    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing_from(&config.observability);
}

#[test]
fn span_macros_expand() {
    let _year = unse_core::year_span!("abc", 2024);
    let _day = unse_core::day_span!(3usize, "2024-01-04");
    let _chart = unse_core::chart_span!(2_460_000.5f64, "placidus");
    let _cache = unse_core::cache_span!("key");
}
