//! How much of the analysis had its inputs.

use serde::{Deserialize, Serialize};

use unse_core::models::SajuProfile;

pub const BASE_CONFIDENCE: u8 = 60;
pub const TIME_PILLAR_BONUS: u8 = 15;
pub const DAEUN_BONUS: u8 = 10;
pub const YONGSIN_BONUS: u8 = 10;
pub const CROSS_VERIFIED_BONUS: u8 = 5;
pub const MAX_CONFIDENCE: u8 = 100;

pub const MISSING_TIME_PILLAR: &str = "missing time pillar";
pub const MISSING_DAEUN: &str = "missing daeun cycles";
pub const MISSING_YONGSIN: &str = "missing yongsin";
pub const NOT_CROSS_VERIFIED: &str = "not cross-verified with astrology";
pub const COMPLETE_ANALYSIS: &str = "complete analysis";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    pub confidence: u8,
    pub note: String,
}

pub fn calculate_confidence(profile: &SajuProfile, cross_verified: bool) -> ConfidenceResult {
    let checks = [
        (profile.has_time_pillar(), TIME_PILLAR_BONUS, MISSING_TIME_PILLAR),
        (profile.has_daeun(), DAEUN_BONUS, MISSING_DAEUN),
        (profile.yongsin.is_some(), YONGSIN_BONUS, MISSING_YONGSIN),
        (cross_verified, CROSS_VERIFIED_BONUS, NOT_CROSS_VERIFIED),
    ];

    let mut confidence = BASE_CONFIDENCE;
    let mut missing = Vec::new();
    for (present, bonus, label) in checks {
        if present {
            confidence = confidence.saturating_add(bonus);
        } else {
            missing.push(label);
        }
    }

    let note = if missing.is_empty() {
        COMPLETE_ANALYSIS.to_string()
    } else {
        format!("limitations: {}", missing.join(", "))
    };
    ConfidenceResult {
        confidence: confidence.min(MAX_CONFIDENCE),
        note,
    }
}
