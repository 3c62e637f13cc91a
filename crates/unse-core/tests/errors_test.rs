use std::collections::HashSet;

use chrono::NaiveDate;
use unse_core::errors::error_code::{self, ErrorCode};
use unse_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let codes: Vec<&str> = vec![
        EphemerisError::Timeout { timeout_ms: 10 }.error_code(),
        ChartError::UnknownZone { zone: "x".into() }.error_code(),
        CalendarError::InvalidDate {
            date: NaiveDate::from_ymd_opt(1700, 1, 1).unwrap(),
        }
        .error_code(),
        ConfigError::UnknownBackend { name: "x".into() }.error_code(),
        CacheError::Backend { reason: "down".into() }.error_code(),
        EngineError::Cancelled { completed_days: 3 }.error_code(),
    ];
    assert!(codes.iter().all(|c| !c.is_empty()));
    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn ephemeris_errors_keep_their_code_through_wrapping() {
    let eph = EphemerisError::NativeFault { code: -7 };
    let chart: ChartError = eph.clone().into();
    let engine: EngineError = chart.into();
    assert_eq!(engine.error_code(), error_code::EPHEMERIS_FAILURE);
}

#[test]
fn coordinate_errors_are_invalid_input() {
    let err = ChartError::InvalidLatitude { value: 91.0 };
    assert_eq!(err.error_code(), error_code::INVALID_INPUT);
}

#[test]
fn native_fault_message_carries_only_the_code() {
    let err = EphemerisError::NativeFault { code: 42 };
    assert_eq!(err.coded_string(), "[EPHEMERIS_FAILURE] ephemeris backend fault (code 42)");
}

#[test]
fn config_error_converts_to_engine_error() {
    let err: EngineError = ConfigError::UnknownHouseSystem { name: "koch".into() }.into();
    assert!(matches!(err, EngineError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIGURATION_ERROR);
    assert!(err.to_string().contains("koch"));
}

#[test]
fn invalid_pillar_is_invalid_input() {
    let err = CalendarError::InvalidPillar { stem: 0, branch: 1 };
    assert_eq!(err.error_code(), error_code::INVALID_INPUT);
}
