//! # unse-core
//!
//! Foundation crate for the Unse daily-fortune engine.
//! Defines the sexagenary alphabets, the Five-Element relation graph, the
//! data model, errors, config, collaborator traits, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod element;
pub mod errors;
pub mod ganzhi;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod zodiac;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use element::{Element, ElementRelation};
pub use errors::{EngineError, EngineResult, ErrorCode};
pub use ganzhi::{Branch, Pillar, Polarity, Stem};
pub use models::{
    AspectHit, AspectType, BirthProfile, Body, Category, Chart, DailyRecord, DayOutcome, Grade,
    HouseSystem, SajuProfile, YearSummary,
};
pub use zodiac::ZodiacSign;
