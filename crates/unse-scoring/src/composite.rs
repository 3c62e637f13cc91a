//! Composite day score from the per-system scores.

use unse_core::config::CompositeWeights;
use unse_core::models::ScoreBreakdown;

use crate::normalize::clamp_score;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScore {
    pub value: f64,
    /// Astrology was missing and the Saju terms were renormalized.
    pub saju_only: bool,
}

/// Weighted mean of the breakdown. Without an activity score the Saju
/// weights are renormalized to sum to one.
pub fn composite_score(b: &ScoreBreakdown, w: &CompositeWeights) -> CompositeScore {
    let saju = w.daeun * b.daeun + w.seun * b.seun + w.wolun * b.wolun + w.iljin * b.iljin;
    let (sum, total, saju_only) = match b.activity {
        Some(a) => (saju + w.activity * a, w.total(), false),
        None => (saju, w.saju_total(), true),
    };
    let value = if total > 0.0 { sum / total } else { 0.0 };
    CompositeScore {
        value: clamp_score(value),
        saju_only,
    }
}
