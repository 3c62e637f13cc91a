#![allow(dead_code)]

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use unse_astro::{AnalyticEphemeris, StaticTimezoneDb};
use unse_calendar::{CalendarOrchestrator, Cancellation};
use unse_core::config::EngineConfig;
use unse_core::errors::{ChartError, EphemerisError};
use unse_core::models::{Body, BodyPosition};
use unse_core::traits::{CacheStore, EphemerisBackend, TimezoneDb};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.workers.threads = 2;
    config
}

pub fn orchestrator_with(
    backend: Arc<dyn EphemerisBackend>,
    timezones: Arc<dyn TimezoneDb>,
    store: Option<Arc<dyn CacheStore>>,
) -> CalendarOrchestrator {
    CalendarOrchestrator::with_cache_store(config(), backend, timezones, store).unwrap()
}

pub fn orchestrator() -> CalendarOrchestrator {
    orchestrator_with(
        Arc::new(AnalyticEphemeris::new()),
        Arc::new(StaticTimezoneDb::new()),
        None,
    )
}

/// Analytic positions, failing for Julian days inside `failing`.
pub struct FlakyEphemeris {
    pub failing: Range<f64>,
}

impl EphemerisBackend for FlakyEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        if self.failing.contains(&jd_ut) {
            return Err(EphemerisError::NativeFault { code: 7 });
        }
        AnalyticEphemeris::new().position(jd_ut, body)
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

/// Analytic positions with a call counter.
#[derive(Default)]
pub struct CountingEphemeris {
    pub calls: AtomicUsize,
}

impl CountingEphemeris {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EphemerisBackend for CountingEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        AnalyticEphemeris::new().position(jd_ut, body)
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Analytic positions, each call taking at least `delay`.
pub struct SlowEphemeris {
    pub delay: Duration,
}

impl EphemerisBackend for SlowEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        thread::sleep(self.delay);
        AnalyticEphemeris::new().position(jd_ut, body)
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

/// Analytic positions that raise `cancel` once `after` calls have been made.
pub struct CancellingEphemeris {
    pub cancel: Cancellation,
    pub after: usize,
    pub calls: AtomicUsize,
}

impl EphemerisBackend for CancellingEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) + 1 >= self.after {
            self.cancel.cancel();
        }
        AnalyticEphemeris::new().position(jd_ut, body)
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "cancelling"
    }
}

/// Static zones, except that offsets inside one month of one year fail.
pub struct BrokenMonthTimezones {
    pub year: i32,
    pub month: u32,
}

impl TimezoneDb for BrokenMonthTimezones {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<String, ChartError> {
        StaticTimezoneDb::new().resolve(latitude, longitude)
    }

    fn offset_minutes(&self, zone: &str, instant: DateTime<Utc>) -> Result<i32, ChartError> {
        if instant.year() == self.year && instant.month() == self.month {
            return Err(ChartError::UnknownZone {
                zone: zone.to_string(),
            });
        }
        StaticTimezoneDb::new().offset_minutes(zone, instant)
    }
}
