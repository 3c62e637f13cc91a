//! Raw-value → [0, 100] normalizers for score components.

use unse_core::constants::NEUTRAL_SCORE;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Clamp into [0, 100]. NaN maps to the neutral score.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return NEUTRAL_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Signed points around the neutral score.
pub fn from_neutral(points: f64) -> f64 {
    clamp_score(NEUTRAL_SCORE + points)
}

/// Fraction in [0, 1] to a percentage.
pub fn percent(fraction: f64) -> f64 {
    clamp_score(fraction * MAX_SCORE)
}

/// Signed points around neutral, scaled first.
pub fn scaled_from_neutral(scale: f64) -> impl Fn(f64) -> f64 + Send + Sync {
    move |v| from_neutral(v * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps() {
        assert_eq!(clamp_score(120.0), 100.0);
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(f64::NAN), NEUTRAL_SCORE);
        assert_eq!(from_neutral(-60.0), 0.0);
        assert_eq!(percent(0.25), 25.0);
    }
}
