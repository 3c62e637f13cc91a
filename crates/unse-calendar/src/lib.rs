//! # unse-calendar
//!
//! Drives every other crate for one `(profile, year)`: builds the Saju
//! profile and natal chart once, scores each day of the year in parallel,
//! and aggregates the results into a [`YearCalendar`]. Results are cached
//! per profile fingerprint and year with at most one computation in flight
//! per key.

pub mod cache;
pub mod cancellation;
pub mod day;
pub mod orchestrator;
pub mod year;

pub use cache::{cache_key, InMemoryCacheStore, YearCache};
pub use cancellation::Cancellation;
pub use orchestrator::{CalendarOrchestrator, PreparedProfile};
pub use year::YearCalendar;
