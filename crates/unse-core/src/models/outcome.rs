use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::DailyRecord;

/// Why a day was scored from a reduced set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradeReason {
    pub component: String,
    pub code: String,
}

/// A day that produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFailure {
    /// Zero-based day of the requested year.
    pub day_index: usize,
    pub date: NaiveDate,
    pub code: String,
    pub detail: String,
}

/// Per-day result. A failure in one day never affects another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayOutcome {
    Ok { record: DailyRecord },
    Degraded { record: DailyRecord, reason: DegradeReason },
    Failed { failure: DayFailure },
}

impl DayOutcome {
    pub fn record(&self) -> Option<&DailyRecord> {
        match self {
            Self::Ok { record } | Self::Degraded { record, .. } => Some(record),
            Self::Failed { .. } => None,
        }
    }

    pub fn record_mut(&mut self) -> Option<&mut DailyRecord> {
        match self {
            Self::Ok { record } | Self::Degraded { record, .. } => Some(record),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
