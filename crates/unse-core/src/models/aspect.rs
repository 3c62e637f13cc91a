use serde::{Deserialize, Serialize};

use super::chart::Body;

/// Major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    /// Exact angle in degrees.
    pub fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Maximum allowed deviation from the exact angle (inclusive).
    pub fn max_orb(self) -> f64 {
        match self {
            Self::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn is_harmonious(self) -> bool {
        matches!(self, Self::Sextile | Self::Trine)
    }

    pub fn is_hard(self) -> bool {
        matches!(self, Self::Square | Self::Opposition)
    }
}

/// Outcome of classifying one angular separation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectResult {
    pub aspect: Option<AspectType>,
    /// Deviation from the matched angle, or the raw separation when nothing
    /// matched.
    pub orb: f64,
}

/// An aspect between two chart bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHit {
    pub planet1: Body,
    pub planet2: Body,
    pub aspect: Option<AspectType>,
    pub orb: f64,
}

impl AspectHit {
    /// 1.0 at exact, 0.0 at the orb limit.
    pub fn tightness(&self) -> f64 {
        match self.aspect {
            Some(t) => (1.0 - self.orb / t.max_orb()).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
