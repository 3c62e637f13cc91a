//! Builds a [`SajuProfile`] from validated birth data.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::debug;

use unse_astro::timezone::local_to_utc;
use unse_core::config::SajuConfig;
use unse_core::constants::{DAEUN_CYCLE_COUNT, DAEUN_SPAN_YEARS};
use unse_core::element::Element;
use unse_core::errors::{CalendarError, EngineResult};
use unse_core::ganzhi::{Pillar, Polarity};
use unse_core::models::{BirthProfile, DaeunCycle, Gender, SajuPillars, SajuProfile};
use unse_core::traits::TimezoneDb;

use crate::calendar::GanzhiCalendar;
use crate::hidden_stems::principal_stem;
use crate::solar_terms::{next_jie, previous_jie};

/// Three days of distance to the governing jie count as one year of age.
const DAYS_PER_DAEUN_YEAR: f64 = 3.0;
const MIN_DAEUN_START: u32 = 1;
const MAX_DAEUN_START: u32 = 10;

/// The month branch counts double when judging day-master strength.
const MONTH_BRANCH_WEIGHT: i32 = 2;

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

pub struct SajuProfileBuilder {
    calendar: GanzhiCalendar,
    timezones: Arc<dyn TimezoneDb>,
    config: SajuConfig,
}

impl SajuProfileBuilder {
    pub fn new(timezones: Arc<dyn TimezoneDb>, config: SajuConfig) -> Self {
        Self {
            calendar: GanzhiCalendar::new(),
            timezones,
            config,
        }
    }

    /// Birth instant in UTC. An unknown birth time is taken as local noon.
    pub fn birth_instant(&self, birth: &BirthProfile) -> EngineResult<DateTime<Utc>> {
        let zone = match birth.timezone.as_deref() {
            Some(z) => z.to_string(),
            None => self.timezones.resolve(birth.latitude, birth.longitude)?,
        };
        let local = birth.date.and_time(birth.time.unwrap_or_else(noon));
        Ok(local_to_utc(self.timezones.as_ref(), &zone, local)?)
    }

    pub fn build(&self, birth: &BirthProfile) -> EngineResult<SajuProfile> {
        birth.validate()?;
        let instant = self.birth_instant(birth)?;

        let day = self.calendar.day_pillar(birth.date)?;
        let pillars = SajuPillars {
            year: self.calendar.year_pillar_at(instant)?,
            month: self.calendar.month_pillar_at(instant)?,
            day,
            time: birth.time.map(|t| self.calendar.hour_pillar(day.stem(), t)),
        };

        let daeun_cycles = match birth.gender {
            Some(gender) => daeun_cycles(&pillars, gender, instant)?,
            None => Vec::new(),
        };

        let yongsin = match birth.yongsin {
            Some(e) => Some(e),
            None if self.config.estimate_yongsin => Some(estimate_yongsin(&pillars)),
            None => None,
        };

        debug!(
            day_pillar = %pillars.day,
            has_time = pillars.time.is_some(),
            daeun = daeun_cycles.len(),
            yongsin = ?yongsin,
            "saju profile built"
        );

        Ok(SajuProfile {
            birth_date: birth.date,
            pillars,
            day_master_element: day.stem_element(),
            daeun_cycles,
            yongsin,
        })
    }
}

/// Daeun runs forward for yang-year men and yin-year women, backward
/// otherwise. The start age is the distance to the governing jie in days
/// divided by three.
pub fn daeun_cycles(
    pillars: &SajuPillars,
    gender: Gender,
    birth: DateTime<Utc>,
) -> Result<Vec<DaeunCycle>, CalendarError> {
    let yang = pillars.year.stem().polarity() == Polarity::Yang;
    let forward = yang == (gender == Gender::Male);

    let days = if forward {
        (next_jie(birth)? - birth).num_minutes() as f64 / 1_440.0
    } else {
        (birth - previous_jie(birth)?).num_minutes() as f64 / 1_440.0
    };
    let start_age = ((days / DAYS_PER_DAEUN_YEAR).round() as u32).clamp(MIN_DAEUN_START, MAX_DAEUN_START);

    let step: i64 = if forward { 1 } else { -1 };
    Ok((0..DAEUN_CYCLE_COUNT)
        .map(|i| {
            let pillar: Pillar = pillars.month.shifted(step * (i as i64 + 1));
            let start = start_age + DAEUN_SPAN_YEARS * i as u32;
            DaeunCycle {
                stem: pillar.stem(),
                branch: pillar.branch(),
                element: pillar.stem_element(),
                start_age: start,
                end_age: start + DAEUN_SPAN_YEARS,
            }
        })
        .collect())
}

/// Rough favourable element from pillar balance: a strong day master wants
/// its output element, a weak one the element that feeds it.
pub fn estimate_yongsin(pillars: &SajuPillars) -> Element {
    let dm = pillars.day.stem_element();
    let supports = |e: Element| e == dm || e == dm.generated_by();
    let vote = |e: Element, weight: i32| if supports(e) { weight } else { -weight };

    let mut balance = 0;
    for p in [Some(pillars.year), Some(pillars.month), pillars.time].into_iter().flatten() {
        balance += vote(p.stem_element(), 1);
    }
    let mut branches = vec![
        (pillars.year, 1),
        (pillars.month, MONTH_BRANCH_WEIGHT),
        (pillars.day, 1),
    ];
    if let Some(t) = pillars.time {
        branches.push((t, 1));
    }
    for (p, w) in branches {
        balance += vote(principal_stem(p.branch()).element(), w);
    }

    if balance > 0 {
        dm.generates()
    } else {
        dm.generated_by()
    }
}
