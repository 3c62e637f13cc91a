//! Scoring of a single day.
//!
//! The Saju side is required: if it fails the day is `Failed`. The
//! astrology side is optional: if it fails the day is `Degraded` and the
//! composite falls back to the Saju terms.

use chrono::NaiveDate;
use tracing::{debug, warn, Level};

use unse_astro::{cross_aspects, TransitChartBuilder};
use unse_core::config::CompositeWeights;
use unse_core::constants::NEUTRAL_SCORE;
use unse_core::day_span;
use unse_core::errors::{error_code, EngineResult, ErrorCode};
use unse_core::ganzhi::Pillar;
use unse_core::models::{
    Category, DailyRecord, DayFailure, DayOutcome, DegradeReason, ScoreBreakdown,
};
use unse_saju::calendar::local_noon_utc;
use unse_saju::energy_flow::EnergyFlowReport;
use unse_saju::{EnergyFlowAnalyzer, GanzhiCalendar, GongmangAnalyzer, GongmangResult, ShinsalAnnotator, ShinsalResult};
use unse_scoring::{
    activity_score, analyze_time_context, best_area, calculate_confidence, composite_score,
    generate_categories, transit_sync, CategoryInput, CycleCalculators, CycleInput, GradeClassifier,
    IljinInput, SpecialFlags, TimeContextInput,
};

use crate::orchestrator::PreparedProfile;

pub const NATAL_COMPONENT: &str = "natal-chart";
pub const TRANSIT_COMPONENT: &str = "transit-chart";

struct SajuFacts {
    day: Pillar,
    month: Pillar,
    year: Pillar,
    gongmang: GongmangResult,
    shinsal: ShinsalResult,
    energy: EnergyFlowReport,
}

struct AstroFacts {
    activity: f64,
    best_area: Category,
    transit_sync: bool,
}

/// Everything a worker needs to score one day. All borrows are shared.
pub struct DayScorer<'a> {
    pub calendar: GanzhiCalendar,
    pub charts: &'a TransitChartBuilder,
    pub calculators: &'a CycleCalculators,
    pub grades: &'a GradeClassifier,
    pub weights: &'a CompositeWeights,
    pub prepared: &'a PreparedProfile,
}

impl DayScorer<'_> {
    pub fn score(&self, day_index: usize, date: NaiveDate, today: NaiveDate) -> DayOutcome {
        let _span = day_span!(day_index, date).entered();

        let saju = match self.saju_facts(date) {
            Ok(facts) => facts,
            Err(e) => {
                warn!(day_index, error_code = e.error_code(), "day failed");
                return DayOutcome::Failed {
                    failure: DayFailure {
                        day_index,
                        date,
                        code: e.error_code().to_string(),
                        detail: e.to_string(),
                    },
                };
            }
        };

        let astro = self.astro_facts(date);
        if let Err(reason) = &astro {
            if reason.component == TRANSIT_COMPONENT {
                warn!(day_index, error_code = %reason.code, "transit chart unavailable, scoring saju terms only");
            } else {
                debug!(day_index, "no natal chart, scoring saju terms only");
            }
        }

        let record = self.assemble(date, today, &saju, astro.as_ref().ok());
        match astro {
            Ok(_) => DayOutcome::Ok { record },
            Err(reason) => DayOutcome::Degraded { record, reason },
        }
    }

    fn saju_facts(&self, date: NaiveDate) -> EngineResult<SajuFacts> {
        let p = self.prepared;
        let noon = local_noon_utc(date, 0)?;
        let offset = self.charts.timezones().offset_minutes(&p.zone, noon)?;

        let day = self.calendar.day_pillar(date)?;
        let month = self.calendar.month_pillar(date, offset)?;
        let year = self.calendar.year_pillar(date, offset)?;

        let natal = &p.saju.pillars;
        Ok(SajuFacts {
            gongmang: GongmangAnalyzer::analyze(natal.day, day.branch()),
            shinsal: ShinsalAnnotator::analyze_day(natal.day.stem(), natal.day.branch(), day.branch()),
            energy: EnergyFlowAnalyzer::analyze_day(natal, day),
            day,
            month,
            year,
        })
    }

    fn astro_facts(&self, date: NaiveDate) -> Result<AstroFacts, DegradeReason> {
        let p = self.prepared;
        let natal = p.natal.as_ref().ok_or_else(|| DegradeReason {
            component: NATAL_COMPONENT.to_string(),
            code: p
                .natal_error
                .clone()
                .unwrap_or_else(|| error_code::CHART_ERROR.to_string()),
        })?;

        let transit = self
            .charts
            .build_local(date, None, Some(&p.zone), p.birth.latitude, p.birth.longitude)
            .map_err(|e| DegradeReason {
                component: TRANSIT_COMPONENT.to_string(),
                code: e.error_code().to_string(),
            })?;

        let hits = cross_aspects(&transit, natal);
        Ok(AstroFacts {
            activity: activity_score(&hits),
            best_area: best_area(&hits),
            transit_sync: transit_sync(&hits),
        })
    }

    fn assemble(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        saju: &SajuFacts,
        astro: Option<&AstroFacts>,
    ) -> DailyRecord {
        let profile = &self.prepared.saju;
        let natal = &profile.pillars;
        let calc = self.calculators;

        let cycle = |pillar: Pillar| CycleInput {
            day_master: natal.day.stem(),
            natal_day_branch: natal.day.branch(),
            yongsin: profile.yongsin,
            pillar,
        };

        let daeun = profile
            .daeun_on(date)
            .and_then(|c| c.pillar())
            .map(|pillar| calc.daeun.calculate(&cycle(pillar)))
            .unwrap_or(NEUTRAL_SCORE);
        let iljin_input = IljinInput {
            cycle: cycle(saju.day),
            shinsal_score: saju.shinsal.score,
            gongmang_void: saju.gongmang.is_target_empty,
            energy_modifier: saju.energy.modifier(),
        };
        if tracing::enabled!(Level::DEBUG) {
            debug!(components = ?calc.iljin.breakdown(&iljin_input), "iljin breakdown");
        }
        let breakdown = ScoreBreakdown {
            daeun,
            seun: calc.seun.calculate(&cycle(saju.year)),
            wolun: calc.wolun.calculate(&cycle(saju.month)),
            iljin: calc.iljin.calculate(&iljin_input),
            activity: astro.map(|a| a.activity),
        };

        let categories = generate_categories(&CategoryInput {
            ganzhi: saju.day,
            day_master: profile.day_master_element,
            day_branch: natal.day.branch(),
            relation: CategoryInput::relation_for(profile.day_master_element, saju.day),
            seun_score: breakdown.seun,
            wolun_score: breakdown.wolun,
            flags: SpecialFlags::from_shinsal(&saju.shinsal, saju.gongmang.is_target_empty),
            best_area: astro.map_or(Category::General, |a| a.best_area),
        });

        let composite = composite_score(&breakdown, self.weights);
        let grade = self.grades.calculate_grade(composite.value);
        let confidence = calculate_confidence(profile, astro.is_some());
        let major_transit = astro.is_some_and(|a| a.transit_sync);

        let time_context = analyze_time_context(&TimeContextInput {
            date,
            today,
            grade,
            gongmang_active: saju.gongmang.is_target_empty,
            lucky_shinsal_active: saju.shinsal.has_lucky(),
            transit_sync: major_transit,
        });

        DailyRecord {
            date,
            ganzhi_pillar: saju.day,
            score_breakdown: breakdown,
            composite_score: composite.value,
            grade,
            categories,
            gongmang_status: saju.gongmang.into(),
            shinsal_active: saju.shinsal.active.clone(),
            confidence: confidence.confidence,
            confidence_note: confidence.note,
            time_context,
            major_transit,
            partial: composite.saju_only,
        }
    }
}
