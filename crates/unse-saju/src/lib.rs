//! # unse-saju
//!
//! Four Pillars mechanics: sexagenary day/month/year/hour pillars anchored
//! on solar terms, void branches (공망), special stars (신살), branch
//! interactions, day-master rootedness (통근/투출), and construction of a
//! [`unse_core::models::SajuProfile`] from birth data.

pub mod calendar;
pub mod energy_flow;
pub mod gongmang;
pub mod hidden_stems;
pub mod interactions;
pub mod profile_builder;
pub mod shinsal;
pub mod solar_terms;

pub use calendar::GanzhiCalendar;
pub use energy_flow::{EnergyFlowAnalyzer, EnergyFlowReport};
pub use gongmang::{GongmangAnalyzer, GongmangResult};
pub use interactions::BranchInteraction;
pub use profile_builder::SajuProfileBuilder;
pub use shinsal::{ShinsalAnnotator, ShinsalResult};
