use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use crate::element::Element;
use crate::errors::EngineError;
use crate::ganzhi::{Branch, Pillar, Stem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Birth data as handed over by the upstream validation layer.
///
/// `time` is optional (unknown birth hour); `timezone` is an IANA-style zone
/// id resolved through the timezone collaborator, or `None` to resolve from
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Externally determined favourable element, if the caller has one.
    #[serde(default)]
    pub yongsin: Option<Element>,
}

impl BirthProfile {
    /// Boundary range checks. Everything downstream assumes these hold.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(-90.0..=90.0).contains(&self.latitude) || !self.latitude.is_finite() {
            return Err(EngineError::InvalidInput {
                field: "latitude",
                reason: format!("{} outside [-90, 90]", self.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) || !self.longitude.is_finite() {
            return Err(EngineError::InvalidInput {
                field: "longitude",
                reason: format!("{} outside [-180, 180]", self.longitude),
            });
        }
        if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&self.date.year()) {
            return Err(EngineError::InvalidInput {
                field: "date",
                reason: format!(
                    "{} outside {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}",
                    self.date
                ),
            });
        }
        Ok(())
    }

    /// Stable blake3 fingerprint of the profile's canonical JSON form.
    pub fn fingerprint(&self) -> String {
        // Struct field order is fixed, so serde_json output is canonical.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }
}

/// The four natal pillars. The hour pillar is absent when the birth time is
/// unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SajuPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub time: Option<Pillar>,
}

/// One decade-luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaeunCycle {
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
    pub start_age: u32,
    pub end_age: u32,
}

impl DaeunCycle {
    pub fn pillar(&self) -> Option<Pillar> {
        Pillar::new(self.stem, self.branch).ok()
    }

    /// Whether a (fractional) age falls in `[start_age, end_age)`.
    pub fn covers(&self, age: f64) -> bool {
        age >= self.start_age as f64 && age < self.end_age as f64
    }
}

/// Derived Saju analysis of a birth profile. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuProfile {
    pub birth_date: NaiveDate,
    pub pillars: SajuPillars,
    pub day_master_element: Element,
    /// Ascending by `start_age`, contiguous, non-overlapping.
    pub daeun_cycles: Vec<DaeunCycle>,
    pub yongsin: Option<Element>,
}

impl SajuProfile {
    pub fn day_master(&self) -> Stem {
        self.pillars.day.stem()
    }

    pub fn has_time_pillar(&self) -> bool {
        self.pillars.time.is_some()
    }

    pub fn has_daeun(&self) -> bool {
        !self.daeun_cycles.is_empty()
    }

    /// Age in fractional years on `date` (Gregorian mean year).
    pub fn age_on(&self, date: NaiveDate) -> f64 {
        (date - self.birth_date).num_days() as f64 / 365.2425
    }

    /// Daeun cycle active on `date`, if any.
    pub fn daeun_on(&self, date: NaiveDate) -> Option<&DaeunCycle> {
        let age = self.age_on(date);
        self.daeun_cycles.iter().find(|c| c.covers(age))
    }

    /// Checks the ordering invariant on daeun cycles.
    pub fn daeun_is_well_formed(&self) -> bool {
        self.daeun_cycles
            .windows(2)
            .all(|w| w[0].end_age <= w[1].start_age && w[0].start_age < w[1].start_age)
            && self.daeun_cycles.iter().all(|c| c.start_age < c.end_age)
    }
}
