use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Pillar};

/// Day grade. Lower ordinal is better; serialized as the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Grade {
    Best = 0,
    Good = 1,
    Normal = 2,
    Bad = 3,
    Worst = 4,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Best,
        Grade::Good,
        Grade::Normal,
        Grade::Bad,
        Grade::Worst,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl From<Grade> for u8 {
    fn from(g: Grade) -> Self {
        g.ordinal()
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("grade ordinal {value} outside 0..=4"))
    }
}

/// Life-area tag attached to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Career,
    Study,
    Wealth,
    Love,
    Health,
    Travel,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Career => "career",
            Self::Study => "study",
            Self::Wealth => "wealth",
            Self::Love => "love",
            Self::Health => "health",
            Self::Travel => "travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-system scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub daeun: f64,
    pub seun: f64,
    pub wolun: f64,
    pub iljin: f64,
    /// Transit activity. `None` when the astrology side failed for the day.
    pub activity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GongmangStatus {
    pub empty_branches: [Branch; 2],
    /// Whether the day's branch is one of the natal void branches.
    pub is_void: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarKind {
    Lucky,
    Unlucky,
    Special,
}

/// A special star (신살) that fired for a day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveStar {
    pub name: String,
    pub kind: StarKind,
}

/// Retrospective label for a past day. The string forms are short stable
/// labels for downstream narrative layers, not prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetrospectiveNote {
    VeryFavorableEnergy,
    ChallengingEnergy,
    VoidDay,
    AuspiciousStar,
    TurningPoint,
}

impl RetrospectiveNote {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryFavorableEnergy => "very favorable energy",
            Self::ChallengingEnergy => "challenging energy",
            Self::VoidDay => "void day",
            Self::AuspiciousStar => "auspicious star",
            Self::TurningPoint => "turning point",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    pub is_past: bool,
    pub is_today: bool,
    pub is_future: bool,
    pub days_from_today: i64,
    pub retrospective_note: Option<RetrospectiveNote>,
}

/// Fully scored day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub ganzhi_pillar: Pillar,
    pub score_breakdown: ScoreBreakdown,
    pub composite_score: f64,
    pub grade: Grade,
    pub categories: Vec<Category>,
    pub gongmang_status: GongmangStatus,
    pub shinsal_active: Vec<ActiveStar>,
    pub confidence: u8,
    pub confidence_note: String,
    pub time_context: TimeContext,
    /// Jupiter/Saturn returns or Saturn opposition in effect.
    pub major_transit: bool,
    /// Some sub-step failed and the record was built from the remainder.
    pub partial: bool,
}

impl DailyRecord {
    pub fn has_lucky_star(&self) -> bool {
        self.shinsal_active.iter().any(|s| s.kind == StarKind::Lucky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&Grade::Bad).unwrap(), "3");
        let g: Grade = serde_json::from_str("1").unwrap();
        assert_eq!(g, Grade::Good);
        assert!(serde_json::from_str::<Grade>("5").is_err());
    }

    #[test]
    fn grade_ordering_follows_ordinal() {
        assert!(Grade::Best < Grade::Worst);
    }
}
