//! Where a date sits relative to the caller's today, plus a retrospective
//! note for past days.

use chrono::NaiveDate;

use unse_core::models::{Grade, RetrospectiveNote, TimeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContextInput {
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub grade: Grade,
    pub gongmang_active: bool,
    pub lucky_shinsal_active: bool,
    pub transit_sync: bool,
}

/// Notes only past dates. First matching rule wins:
/// grade ≤ Good, grade Worst, void day, lucky star, major transit.
pub fn analyze_time_context(input: &TimeContextInput) -> TimeContext {
    let days = (input.date - input.today).num_days();
    let is_past = days < 0;

    let retrospective_note = if !is_past {
        None
    } else if input.grade <= Grade::Good {
        Some(RetrospectiveNote::VeryFavorableEnergy)
    } else if input.grade >= Grade::Worst {
        Some(RetrospectiveNote::ChallengingEnergy)
    } else if input.gongmang_active {
        Some(RetrospectiveNote::VoidDay)
    } else if input.lucky_shinsal_active {
        Some(RetrospectiveNote::AuspiciousStar)
    } else if input.transit_sync {
        Some(RetrospectiveNote::TurningPoint)
    } else {
        None
    };

    TimeContext {
        is_past,
        is_today: days == 0,
        is_future: days > 0,
        days_from_today: days,
        retrospective_note,
    }
}
