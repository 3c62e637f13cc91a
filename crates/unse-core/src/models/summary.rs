use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Grade;

/// Number of days in a Gregorian year.
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Per-grade day counts for one year. Always derived, never stored on its
/// own.
///
/// Failed days have no grade and are counted only in `failed_days`, so
/// `grade_counts` alone sums to `days_in_year` only when no day failed.
/// The full invariant is `total() == days_in_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub days_in_year: u32,
    /// Indexed by grade ordinal.
    pub grade_counts: [u32; 5],
    /// Days scored without their astrology terms.
    pub degraded_days: u32,
    /// Days that produced no record at all.
    pub failed_days: u32,
}

impl YearSummary {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            days_in_year: days_in_year(year),
            grade_counts: [0; 5],
            degraded_days: 0,
            failed_days: 0,
        }
    }

    pub fn record_grade(&mut self, grade: Grade) {
        self.grade_counts[grade.ordinal() as usize] += 1;
    }

    pub fn count(&self, grade: Grade) -> u32 {
        self.grade_counts[grade.ordinal() as usize]
    }

    /// Graded days plus failed days.
    pub fn total(&self) -> u32 {
        self.grade_counts.iter().sum::<u32>() + self.failed_days
    }

    /// Every day of the year is accounted for exactly once.
    pub fn is_complete(&self) -> bool {
        self.total() == self.days_in_year
    }
}
