//! Year computation entry point.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use unse_astro::{EphemerisAdapter, TransitChartBuilder};
use unse_core::cache_span;
use unse_core::config::EngineConfig;
use unse_core::constants::{ENGINE_VERSION, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use unse_core::errors::{EngineError, EngineResult, ErrorCode};
use unse_core::models::{days_in_year, BirthProfile, Chart, DayOutcome, SajuProfile};
use unse_core::traits::{CacheStore, EphemerisBackend, TimezoneDb};
use unse_core::tracing::init_tracing_from;
use unse_core::year_span;
use unse_saju::{GanzhiCalendar, SajuProfileBuilder};
use unse_scoring::{CycleCalculators, GradeClassifier};

use crate::cache::{cache_key, YearCache};
use crate::cancellation::Cancellation;
use crate::day::DayScorer;
use crate::year::YearCalendar;

/// Per-profile state computed once and shared by every day.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedProfile {
    pub fingerprint: String,
    pub birth: BirthProfile,
    /// Zone id used for every local-date conversion of this profile.
    pub zone: String,
    pub saju: SajuProfile,
    /// `None` when the natal chart could not be built; astrology terms are
    /// then skipped for every day.
    pub natal: Option<Chart>,
    pub natal_error: Option<String>,
}

pub struct CalendarOrchestrator {
    config: EngineConfig,
    charts: TransitChartBuilder,
    profiles: SajuProfileBuilder,
    calculators: CycleCalculators,
    grades: GradeClassifier,
    pool: rayon::ThreadPool,
    cache: YearCache,
    config_digest: String,
}

impl CalendarOrchestrator {
    /// Validate config and wire collaborators. Any failure here is fatal.
    pub fn new(
        config: EngineConfig,
        backend: Arc<dyn EphemerisBackend>,
        timezones: Arc<dyn TimezoneDb>,
    ) -> EngineResult<Self> {
        Self::with_cache_store(config, backend, timezones, None)
    }

    /// Build with the ephemeris backend named in config. Also initializes
    /// tracing at `[observability] log_level` unless a subscriber is
    /// already installed.
    pub fn from_config(config: EngineConfig, timezones: Arc<dyn TimezoneDb>) -> EngineResult<Self> {
        init_tracing_from(&config.observability);
        let backend = EphemerisAdapter::backend_from_config(&config.ephemeris)?;
        Self::new(config, backend, timezones)
    }

    pub fn with_cache_store(
        config: EngineConfig,
        backend: Arc<dyn EphemerisBackend>,
        timezones: Arc<dyn TimezoneDb>,
        store: Option<Arc<dyn CacheStore>>,
    ) -> EngineResult<Self> {
        config.validate()?;
        let house_system = config.chart.house_system()?;

        let ephemeris = Arc::new(EphemerisAdapter::new(backend, &config.ephemeris)?);
        let charts = TransitChartBuilder::new(ephemeris, Arc::clone(&timezones), house_system);
        let profiles = SajuProfileBuilder::new(timezones, config.saju.clone());

        let threads = config.workers.effective_threads();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("unse-day-{i}"))
            .build()
            .map_err(|e| EngineError::WorkerPool {
                reason: e.to_string(),
            })?;

        info!(threads, house_system = %house_system, "calendar orchestrator ready");
        Ok(Self {
            grades: GradeClassifier::new(config.scoring.grades),
            calculators: CycleCalculators::new(),
            cache: YearCache::new(&config.cache, store),
            config_digest: config.output_digest(),
            config,
            charts,
            profiles,
            pool,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Saju profile plus natal chart. A natal chart failure only disables
    /// the astrology terms.
    pub fn prepare(&self, birth: &BirthProfile) -> EngineResult<PreparedProfile> {
        let saju = self.profiles.build(birth)?;
        let zone = self
            .charts
            .zone_for(birth.timezone.as_deref(), birth.latitude, birth.longitude)?;

        let (natal, natal_error) = match self.charts.build_local(
            birth.date,
            birth.time,
            Some(&zone),
            birth.latitude,
            birth.longitude,
        ) {
            Ok(chart) => (Some(chart), None),
            Err(e) => {
                warn!(error_code = e.error_code(), "natal chart unavailable, astrology terms disabled");
                (None, Some(e.error_code().to_string()))
            }
        };

        Ok(PreparedProfile {
            fingerprint: birth.fingerprint(),
            birth: birth.clone(),
            zone,
            saju,
            natal,
            natal_error,
        })
    }

    /// Score every day of `year`. Per-day failures never abort the year;
    /// cancellation does.
    pub fn compute_year(
        &self,
        prepared: &PreparedProfile,
        year: i32,
        today: NaiveDate,
        cancel: &Cancellation,
    ) -> EngineResult<YearCalendar> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .filter(|d| (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&d.year()))
            .ok_or_else(|| EngineError::InvalidInput {
                field: "year",
                reason: format!("{year} outside {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}"),
            })?;
        let _span = year_span!(prepared.fingerprint, year).entered();

        let dates: Vec<NaiveDate> = first.iter_days().take(days_in_year(year) as usize).collect();
        let scorer = DayScorer {
            calendar: GanzhiCalendar::new(),
            charts: &self.charts,
            calculators: &self.calculators,
            grades: &self.grades,
            weights: &self.config.scoring.weights,
            prepared,
        };

        let completed = AtomicUsize::new(0);
        let outcomes: Vec<Option<DayOutcome>> = self.pool.install(|| {
            dates
                .par_iter()
                .enumerate()
                .map(|(i, date)| {
                    if cancel.is_cancelled() {
                        return None;
                    }
                    let outcome = scorer.score(i, *date, today);
                    completed.fetch_add(1, Ordering::Relaxed);
                    Some(outcome)
                })
                .collect()
        });

        if outcomes.iter().any(Option::is_none) {
            let completed_days = completed.load(Ordering::Relaxed);
            info!(year, completed_days, "year computation cancelled");
            return Err(EngineError::Cancelled { completed_days });
        }

        let calendar = YearCalendar::new(
            prepared.fingerprint.clone(),
            year,
            ENGINE_VERSION,
            outcomes.into_iter().flatten().collect(),
        );
        info!(
            year,
            degraded = calendar.summary.degraded_days,
            failed = calendar.summary.failed_days,
            "year computed"
        );
        Ok(calendar)
    }

    /// Cache-through year calendar, time context stamped for `today`.
    pub fn calendar_for(
        &self,
        birth: &BirthProfile,
        year: i32,
        today: NaiveDate,
        cancel: &Cancellation,
    ) -> EngineResult<YearCalendar> {
        birth.validate()?;
        let key = self.cache_key_for(birth, year);
        let _span = cache_span!(key).entered();

        // Concurrent callers share one load, which runs under the first
        // caller's cancellation. A caller that did not cancel starts over.
        loop {
            let result = self.cache.get_or_compute(&key, || {
                let prepared = self.prepare(birth)?;
                self.compute_year(&prepared, year, today, cancel)
            });
            match result {
                Err(EngineError::Cancelled { completed_days }) if !cancel.is_cancelled() => {
                    debug!(completed_days, "shared computation cancelled by another caller, retrying");
                }
                other => return other.map(|calendar| calendar.restamped(today)),
            }
        }
    }

    /// Cache key of `(birth, year)` under this engine's config.
    pub fn cache_key_for(&self, birth: &BirthProfile, year: i32) -> String {
        cache_key(&birth.fingerprint(), year, &self.config_digest)
    }

    pub fn cache(&self) -> &YearCache {
        &self.cache
    }
}
