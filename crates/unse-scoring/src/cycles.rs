//! Daeun, Seun, Wolun and Iljin calculators.
//!
//! All four come out of the same factory; they differ only in their
//! component weights, and Iljin adds the day-level modifiers.

use serde::{Deserialize, Serialize};

use unse_core::element::{Element, ElementRelation};
use unse_core::ganzhi::{Branch, Pillar, Stem};
use unse_saju::BranchInteraction;

use crate::factory::{create_score_calculator, ScoreCalculator, ScoreConfig};
use crate::normalize::{from_neutral, scaled_from_neutral};

/// A luck pillar (decade, year, month or day) seen from the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleInput {
    pub day_master: Stem,
    pub natal_day_branch: Branch,
    pub yongsin: Option<Element>,
    pub pillar: Pillar,
}

/// Day-level facts on top of the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IljinInput {
    pub cycle: CycleInput,
    pub shinsal_score: f64,
    pub gongmang_void: bool,
    pub energy_modifier: f64,
}

/// Points for an element as seen by the day master.
fn relation_points(day_master: Stem, element: Element) -> f64 {
    match ElementRelation::between(day_master.element(), element) {
        ElementRelation::GeneratedBy => 15.0,
        ElementRelation::Same => 10.0,
        ElementRelation::Controls => 5.0,
        ElementRelation::Generates => -5.0,
        ElementRelation::ControlledBy => -15.0,
    }
}

fn stem_points(c: &CycleInput) -> f64 {
    relation_points(c.day_master, c.pillar.stem_element())
}

fn branch_points(c: &CycleInput) -> f64 {
    relation_points(c.day_master, c.pillar.branch_element())
}

/// Favourable-element match: the stem counts more than the branch, and an
/// element that controls the yongsin counts against.
fn yongsin_points(c: &CycleInput) -> f64 {
    let Some(y) = c.yongsin else {
        return 0.0;
    };
    let score = |e: Element, full: f64| {
        if e == y {
            full
        } else if e == y.generated_by() {
            full / 2.0
        } else if e == y.controlled_by() {
            -full
        } else {
            0.0
        }
    };
    score(c.pillar.stem_element(), 25.0) + score(c.pillar.branch_element(), 15.0)
}

fn interaction_points(c: &CycleInput) -> f64 {
    BranchInteraction::between(c.natal_day_branch, c.pillar.branch()).score()
}

const GONGMANG_PENALTY: f64 = -30.0;
const GONGMANG_CLEAR: f64 = 5.0;

fn cycle_config(stem: f64, branch: f64, yongsin: f64, interaction: f64) -> ScoreConfig<CycleInput> {
    ScoreConfig::new()
        .component("stem", stem, stem_points, scaled_from_neutral(2.0))
        .component("branch", branch, branch_points, scaled_from_neutral(2.0))
        .component("yongsin", yongsin, yongsin_points, from_neutral)
        .component("interaction", interaction, interaction_points, scaled_from_neutral(3.0))
}

pub fn daeun_calculator() -> ScoreCalculator<CycleInput> {
    create_score_calculator(cycle_config(0.30, 0.30, 0.30, 0.10))
}

pub fn seun_calculator() -> ScoreCalculator<CycleInput> {
    create_score_calculator(cycle_config(0.35, 0.25, 0.20, 0.20))
}

pub fn wolun_calculator() -> ScoreCalculator<CycleInput> {
    create_score_calculator(cycle_config(0.30, 0.30, 0.15, 0.25))
}

pub fn iljin_calculator() -> ScoreCalculator<IljinInput> {
    create_score_calculator(
        ScoreConfig::new()
            .component("stem", 0.25, |i: &IljinInput| stem_points(&i.cycle), scaled_from_neutral(2.0))
            .component("branch", 0.15, |i: &IljinInput| branch_points(&i.cycle), scaled_from_neutral(2.0))
            .component("yongsin", 0.10, |i: &IljinInput| yongsin_points(&i.cycle), from_neutral)
            .component(
                "interaction",
                0.15,
                |i: &IljinInput| interaction_points(&i.cycle),
                scaled_from_neutral(3.0),
            )
            .component("shinsal", 0.20, |i: &IljinInput| i.shinsal_score, scaled_from_neutral(2.5))
            .component(
                "gongmang",
                0.05,
                |i: &IljinInput| if i.gongmang_void { GONGMANG_PENALTY } else { GONGMANG_CLEAR },
                from_neutral,
            )
            .component("energy", 0.10, |i: &IljinInput| i.energy_modifier, scaled_from_neutral(4.0)),
    )
}

/// The four calculators, built once and shared by every worker.
#[derive(Debug)]
pub struct CycleCalculators {
    pub daeun: ScoreCalculator<CycleInput>,
    pub seun: ScoreCalculator<CycleInput>,
    pub wolun: ScoreCalculator<CycleInput>,
    pub iljin: ScoreCalculator<IljinInput>,
}

impl Default for CycleCalculators {
    fn default() -> Self {
        Self {
            daeun: daeun_calculator(),
            seun: seun_calculator(),
            wolun: wolun_calculator(),
            iljin: iljin_calculator(),
        }
    }
}

impl CycleCalculators {
    pub fn new() -> Self {
        Self::default()
    }
}
