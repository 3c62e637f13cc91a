mod common;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use proptest::prelude::*;

use common::{
    date, orchestrator, orchestrator_with, BrokenMonthTimezones, CancellingEphemeris, FlakyEphemeris,
};
use unse_astro::{AnalyticEphemeris, StaticTimezoneDb};
use unse_calendar::year::summarize;
use unse_calendar::{CalendarOrchestrator, Cancellation};
use unse_core::config::EngineConfig;
use unse_core::errors::{ConfigError, EngineError, ErrorCode};
use unse_core::models::{DailyRecord, DayFailure, DayOutcome, Grade};
use unse_core::traits::TimezoneDb;

#[test]
fn leap_year_has_366_outcomes() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();

    let leap = orch
        .compute_year(&prepared, 2024, date(2024, 6, 1), &Cancellation::new())
        .unwrap();
    assert_eq!(leap.outcomes.len(), 366);
    assert_eq!(leap.summary.days_in_year, 366);
    assert!(leap.summary.is_complete());
    assert_eq!(leap.summary.failed_days, 0);
    assert_eq!(leap.summary.degraded_days, 0);

    let common = orch
        .compute_year(&prepared, 2023, date(2024, 6, 1), &Cancellation::new())
        .unwrap();
    assert_eq!(common.outcomes.len(), 365);
    assert!(common.summary.is_complete());
}

#[test]
fn records_are_well_formed() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    let cal = orch
        .compute_year(&prepared, 2024, date(2024, 6, 1), &Cancellation::new())
        .unwrap();

    let mut previous = None;
    for record in cal.records() {
        assert!((0.0..=100.0).contains(&record.composite_score));
        assert!(record.confidence <= 100);
        assert!(!record.categories.is_empty());
        assert!(!record.partial);
        assert!(record.score_breakdown.activity.is_some());
        // Full profile, cross-verified against the transit chart.
        assert_eq!(record.confidence, 100);
        assert_eq!(record.confidence_note, "complete analysis");
        if let Some(prev) = previous {
            assert!(record.date > prev);
        }
        previous = Some(record.date);
    }

    let first = cal.record_for(date(2024, 1, 1)).unwrap();
    assert!(first.time_context.is_past);
    let today = cal.record_for(date(2024, 6, 1)).unwrap();
    assert!(today.time_context.is_today);
    assert_eq!(today.time_context.retrospective_note, None);
    assert_eq!(cal.record_for(date(2024, 2, 10)).unwrap().ganzhi_pillar.to_string(), "甲辰");
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("new_york_female")).unwrap();
    let today = date(2024, 3, 15);
    let a = orch.compute_year(&prepared, 2024, today, &Cancellation::new()).unwrap();
    let b = orch.compute_year(&prepared, 2024, today, &Cancellation::new()).unwrap();
    assert_eq!(
        serde_json::to_vec(&a.outcomes).unwrap(),
        serde_json::to_vec(&b.outcomes).unwrap()
    );
}

#[test]
fn unknown_birth_time_lowers_confidence() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_no_time")).unwrap();
    let cal = orch
        .compute_year(&prepared, 2024, date(2024, 6, 1), &Cancellation::new())
        .unwrap();
    let record = cal.records().next().unwrap();
    // No time, no gender (so no daeun), no yongsin.
    assert_eq!(record.confidence, 65);
    assert!(record.confidence_note.contains("missing time pillar"));
    assert!(record.confidence_note.contains("missing daeun cycles"));
    assert_eq!(record.score_breakdown.daeun, 50.0);
}

#[test]
fn ephemeris_failures_degrade_only_their_days() {
    // 2024-03-02 00:00 UT .. 2024-03-12 00:00 UT. Seoul noon is 03:00 UT.
    let backend = Arc::new(FlakyEphemeris {
        failing: 2_460_371.5..2_460_381.5,
    });
    let orch = orchestrator_with(backend, Arc::new(StaticTimezoneDb::new()), None);
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    assert!(prepared.natal.is_some());

    let cal = orch
        .compute_year(&prepared, 2024, date(2024, 6, 1), &Cancellation::new())
        .unwrap();
    assert_eq!(cal.summary.degraded_days, 10);
    assert_eq!(cal.summary.failed_days, 0);
    assert!(cal.summary.is_complete());

    for outcome in &cal.outcomes {
        let record = outcome.record().unwrap();
        let in_window = record.date >= date(2024, 3, 2) && record.date <= date(2024, 3, 11);
        assert_eq!(outcome.is_degraded(), in_window, "{}", record.date);
        if let DayOutcome::Degraded { record, reason } = outcome {
            assert_eq!(reason.component, "transit-chart");
            assert_eq!(reason.code, "EPHEMERIS_FAILURE");
            assert!(record.partial);
            assert_eq!(record.score_breakdown.activity, None);
            assert_eq!(record.confidence, 95);
            assert!(!record.major_transit);
        }
    }
}

#[test]
fn natal_chart_failure_degrades_every_day() {
    // Every instant before 1995-10-10 fails, including the 1990 birth.
    let backend = Arc::new(FlakyEphemeris {
        failing: 0.0..2_450_000.0,
    });
    let orch = orchestrator_with(backend, Arc::new(StaticTimezoneDb::new()), None);
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    assert!(prepared.natal.is_none());
    assert_eq!(prepared.natal_error.as_deref(), Some("EPHEMERIS_FAILURE"));

    let cal = orch
        .compute_year(&prepared, 2023, date(2024, 6, 1), &Cancellation::new())
        .unwrap();
    assert_eq!(cal.summary.degraded_days, 365);
    assert!(cal.summary.is_complete());
    assert!(cal.outcomes.iter().all(|o| matches!(
        o,
        DayOutcome::Degraded { reason, .. } if reason.component == "natal-chart"
    )));
}

#[test]
fn saju_failures_fail_only_their_days() {
    let tz: Arc<dyn TimezoneDb> = Arc::new(BrokenMonthTimezones { year: 2024, month: 6 });
    let orch = orchestrator_with(Arc::new(AnalyticEphemeris::new()), tz, None);
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();

    let cal = orch
        .compute_year(&prepared, 2024, date(2024, 1, 1), &Cancellation::new())
        .unwrap();
    assert_eq!(cal.summary.failed_days, 30);
    assert_eq!(cal.records().count(), 336);
    assert!(cal.summary.is_complete());

    let failure = cal
        .outcomes
        .iter()
        .find_map(|o| match o {
            DayOutcome::Failed { failure } => Some(failure),
            _ => None,
        })
        .unwrap();
    assert_eq!(failure.date, date(2024, 6, 1));
    assert_eq!(failure.day_index, 152);
    assert_eq!(failure.code, "CHART_ERROR");
}

#[test]
fn cancelled_before_start() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    let cancel = Cancellation::new();
    cancel.cancel();
    let err = orch
        .compute_year(&prepared, 2024, date(2024, 1, 1), &cancel)
        .unwrap_err();
    assert_eq!(err, EngineError::Cancelled { completed_days: 0 });
    assert_eq!(err.error_code(), "CANCELLED");
}

#[test]
fn cancelled_mid_year_keeps_started_days() {
    let cancel = Cancellation::new();
    // Natal chart plus roughly 25 transit days.
    let backend = Arc::new(CancellingEphemeris {
        cancel: cancel.clone(),
        after: 12 * 26,
        calls: AtomicUsize::new(0),
    });
    let orch = orchestrator_with(backend, Arc::new(StaticTimezoneDb::new()), None);
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();

    match orch.compute_year(&prepared, 2023, date(2023, 1, 1), &cancel) {
        Err(EngineError::Cancelled { completed_days }) => {
            assert!(completed_days > 0);
            assert!(completed_days < 365);
        }
        other => panic!("expected cancellation, got {other:?}"),
    }
}

#[test]
fn from_config_builds_the_configured_backend() {
    let mut config = EngineConfig::from_toml("[observability]\nlog_level = \"warn\"").unwrap();
    config.workers.threads = 2;
    let orch = CalendarOrchestrator::from_config(config, Arc::new(StaticTimezoneDb::new())).unwrap();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    assert!(prepared.natal.is_some());
}

#[test]
fn year_outside_range_is_invalid_input() {
    let orch = orchestrator();
    let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
    let err = orch
        .compute_year(&prepared, 2051, date(2024, 1, 1), &Cancellation::new())
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { field: "year", .. }));
}

#[test]
fn every_fixture_prepares() {
    let orch = orchestrator();
    for (name, birth) in test_fixtures::all_birth_profiles() {
        let prepared = orch.prepare(&birth).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(prepared.natal.is_some(), "{name}");
    }
    let london = orch
        .prepare(&test_fixtures::birth_profile("london_resolved_zone"))
        .unwrap();
    assert_eq!(london.zone, "Europe/London");
}

#[test]
fn configuration_errors_are_fatal() {
    let tz = || -> Arc<dyn TimezoneDb> { Arc::new(StaticTimezoneDb::new()) };
    let backend = || Arc::new(AnalyticEphemeris::new());

    let mut config = EngineConfig::default();
    config.chart.house_system = "koch".to_string();
    let err = CalendarOrchestrator::new(config, backend(), tz()).err().unwrap();
    assert!(matches!(err, EngineError::Config(ConfigError::UnknownHouseSystem { .. })));
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");

    let mut config = EngineConfig::default();
    config.ephemeris.data_path = Some("/nonexistent/ephemeris/data".to_string());
    let err = CalendarOrchestrator::from_config(config, tz()).err().unwrap();
    assert!(matches!(err, EngineError::Config(ConfigError::DataPathMissing { .. })));
}

proptest! {
    #[test]
    fn summary_accounts_for_every_day(grades in proptest::collection::vec(proptest::option::of(0u8..5), 1..400)) {
        let template = template_record();
        let outcomes: Vec<DayOutcome> = grades
            .iter()
            .enumerate()
            .map(|(i, g)| match g {
                Some(g) => {
                    let mut record = template.clone();
                    record.grade = Grade::try_from(*g).unwrap();
                    DayOutcome::Ok { record }
                }
                None => DayOutcome::Failed {
                    failure: DayFailure {
                        day_index: i,
                        date: date(2024, 1, 1),
                        code: "CHART_ERROR".into(),
                        detail: String::new(),
                    },
                },
            })
            .collect();
        let summary = summarize(2024, &outcomes);
        prop_assert_eq!(summary.total() as usize, grades.len());
        prop_assert_eq!(summary.failed_days as usize, grades.iter().filter(|g| g.is_none()).count());
    }
}

/// One real record, reused as a template.
fn template_record() -> DailyRecord {
    use std::sync::OnceLock;
    static TEMPLATE: OnceLock<DailyRecord> = OnceLock::new();
    TEMPLATE
        .get_or_init(|| {
            let orch = orchestrator();
            let prepared = orch.prepare(&test_fixtures::birth_profile("seoul_full")).unwrap();
            let cal = orch
                .compute_year(&prepared, 2024, date(2024, 1, 1), &Cancellation::new())
                .unwrap();
            let rec = cal.records().next().unwrap().clone();
            rec
        })
        .clone()
}
