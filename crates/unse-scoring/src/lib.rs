//! # unse-scoring
//!
//! Turns per-day facts into numbers and labels: a generic weighted-sum
//! calculator factory and the four cycle calculators built from it, the
//! transit activity score, the composite, category tags, confidence, grade,
//! and time context.

pub mod activity;
pub mod category;
pub mod composite;
pub mod confidence;
pub mod cycles;
pub mod factory;
pub mod grade;
pub mod normalize;
pub mod time_context;

pub use activity::{activity_score, best_area, transit_sync};
pub use category::{generate_categories, CategoryInput, SpecialFlags};
pub use composite::{composite_score, CompositeScore};
pub use confidence::{calculate_confidence, ConfidenceResult};
pub use cycles::{CycleCalculators, CycleInput, IljinInput};
pub use factory::{create_score_calculator, ComponentScore, ScoreCalculator, ScoreComponent, ScoreConfig};
pub use grade::{calculate_grade, GradeClassifier};
pub use time_context::{analyze_time_context, TimeContextInput};
