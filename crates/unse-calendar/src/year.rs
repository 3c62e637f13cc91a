//! One computed year: per-day outcomes plus the derived summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use unse_core::models::{DailyRecord, DayOutcome, YearSummary};
use unse_scoring::{analyze_time_context, TimeContextInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCalendar {
    pub profile_fingerprint: String,
    pub year: i32,
    pub engine_version: u32,
    /// One outcome per day, in date order.
    pub outcomes: Vec<DayOutcome>,
    pub summary: YearSummary,
}

impl YearCalendar {
    pub fn new(profile_fingerprint: String, year: i32, engine_version: u32, outcomes: Vec<DayOutcome>) -> Self {
        let summary = summarize(year, &outcomes);
        Self {
            profile_fingerprint,
            year,
            engine_version,
            outcomes,
            summary,
        }
    }

    /// Records of every day that produced one, in date order.
    pub fn records(&self) -> impl Iterator<Item = &DailyRecord> + '_ {
        self.outcomes.iter().filter_map(DayOutcome::record)
    }

    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records().find(|r| r.date == date)
    }

    /// Copy with every time context recomputed against `today`.
    pub fn restamped(&self, today: NaiveDate) -> Self {
        let mut out = self.clone();
        for record in out.outcomes.iter_mut().filter_map(DayOutcome::record_mut) {
            record.time_context = analyze_time_context(&TimeContextInput {
                date: record.date,
                today,
                grade: record.grade,
                gongmang_active: record.gongmang_status.is_void,
                lucky_shinsal_active: record.has_lucky_star(),
                transit_sync: record.major_transit,
            });
        }
        out
    }
}

/// Grade counts over every recorded day; failed days are counted apart.
pub fn summarize(year: i32, outcomes: &[DayOutcome]) -> YearSummary {
    let mut summary = YearSummary::new(year);
    for outcome in outcomes {
        match outcome {
            DayOutcome::Ok { record } => summary.record_grade(record.grade),
            DayOutcome::Degraded { record, .. } => {
                summary.record_grade(record.grade);
                summary.degraded_days += 1;
            }
            DayOutcome::Failed { .. } => summary.failed_days += 1,
        }
    }
    summary
}
