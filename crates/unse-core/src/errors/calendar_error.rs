//! Sexagenary calendar errors.

use chrono::NaiveDate;

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("date {date} outside supported range")]
    InvalidDate { date: NaiveDate },

    #[error("stem {stem} and branch {branch} do not form a sexagenary pillar")]
    InvalidPillar { stem: usize, branch: usize },

    #[error("solar term search did not converge near julian day {jd}")]
    SolarTermNotFound { jd: f64 },
}

impl ErrorCode for CalendarError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPillar { .. } => error_code::INVALID_INPUT,
            _ => error_code::INVALID_DATE,
        }
    }
}
