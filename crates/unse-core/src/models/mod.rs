pub mod aspect;
pub mod chart;
pub mod outcome;
pub mod profile;
pub mod record;
pub mod summary;

pub use aspect::{AspectHit, AspectResult, AspectType};
pub use chart::{Body, BodyPosition, Chart, ChartMeta, HouseSystem, PlanetPosition};
pub use outcome::{DayFailure, DayOutcome, DegradeReason};
pub use profile::{BirthProfile, DaeunCycle, Gender, SajuPillars, SajuProfile};
pub use record::{
    ActiveStar, Category, DailyRecord, GongmangStatus, Grade, RetrospectiveNote, ScoreBreakdown,
    StarKind, TimeContext,
};
pub use summary::{days_in_year, YearSummary};
