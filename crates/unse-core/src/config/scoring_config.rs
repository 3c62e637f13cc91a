use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Weights of the per-system scores inside the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub daeun: f64,
    pub seun: f64,
    pub wolun: f64,
    pub iljin: f64,
    pub activity: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            daeun: 0.15,
            seun: 0.20,
            wolun: 0.20,
            iljin: 0.30,
            activity: 0.15,
        }
    }
}

impl CompositeWeights {
    pub fn saju_total(&self) -> f64 {
        self.daeun + self.seun + self.wolun + self.iljin
    }

    pub fn total(&self) -> f64 {
        self.saju_total() + self.activity
    }
}

/// Lower bounds (inclusive) of each grade band.
///
/// Scores ≥ `best` are Best, ≥ `good` Good, ≥ `normal` Normal, ≥ `bad` Bad,
/// everything else Worst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub best: f64,
    pub good: f64,
    pub normal: f64,
    pub bad: f64,
}

impl GradeThresholds {
    pub const DEFAULT_BEST: f64 = 80.0;
    pub const DEFAULT_GOOD: f64 = 68.0;
    pub const DEFAULT_NORMAL: f64 = 41.0;
    pub const DEFAULT_BAD: f64 = 28.0;
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            best: Self::DEFAULT_BEST,
            good: Self::DEFAULT_GOOD,
            normal: Self::DEFAULT_NORMAL,
            bad: Self::DEFAULT_BAD,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: CompositeWeights,
    pub grades: GradeThresholds,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        let all = [w.daeun, w.seun, w.wolun, w.iljin, w.activity];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.weights".into(),
                message: "weights must be finite and non-negative".into(),
            });
        }
        if w.saju_total() <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.weights".into(),
                message: "saju weights must not all be zero".into(),
            });
        }

        let g = &self.grades;
        let descending = g.best > g.good && g.good > g.normal && g.normal > g.bad;
        let in_range = [g.best, g.good, g.normal, g.bad]
            .iter()
            .all(|t| (0.0..=100.0).contains(t));
        if !descending || !in_range {
            return Err(ConfigError::InvalidValue {
                field: "scoring.grades".into(),
                message: "thresholds must be strictly descending within [0, 100]".into(),
            });
        }
        Ok(())
    }
}
