//! Score → grade bands.

use unse_core::config::GradeThresholds;
use unse_core::models::Grade;

/// Band lookup against inclusive lower bounds. NaN is Worst.
pub fn calculate_grade(score: f64, t: &GradeThresholds) -> Grade {
    if score >= t.best {
        Grade::Best
    } else if score >= t.good {
        Grade::Good
    } else if score >= t.normal {
        Grade::Normal
    } else if score >= t.bad {
        Grade::Bad
    } else {
        Grade::Worst
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GradeClassifier {
    thresholds: GradeThresholds,
}

impl GradeClassifier {
    pub fn new(thresholds: GradeThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &GradeThresholds {
        &self.thresholds
    }

    pub fn calculate_grade(&self, score: f64) -> Grade {
        calculate_grade(score, &self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let g = GradeClassifier::default();
        assert_eq!(g.calculate_grade(100.0), Grade::Best);
        assert_eq!(g.calculate_grade(80.0), Grade::Best);
        assert_eq!(g.calculate_grade(79.99), Grade::Good);
        assert_eq!(g.calculate_grade(68.0), Grade::Good);
        assert_eq!(g.calculate_grade(41.0), Grade::Normal);
        assert_eq!(g.calculate_grade(28.0), Grade::Bad);
        assert_eq!(g.calculate_grade(27.9), Grade::Worst);
        assert_eq!(g.calculate_grade(f64::NAN), Grade::Worst);
    }
}
