//! Life-area tags for a day.

use serde::{Deserialize, Serialize};

use unse_core::element::{Element, ElementRelation};
use unse_core::ganzhi::{Branch, Pillar};
use unse_core::models::Category;
use unse_saju::shinsal::{names, ShinsalResult};
use unse_saju::BranchInteraction;

/// Both the year and month scores at or above this add Wealth.
const PROSPEROUS_CYCLE: f64 = 70.0;
/// Both below this add Health.
const STRAINED_CYCLE: f64 = 40.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFlags {
    /// No unlucky star and not a void day.
    pub no_obstruction: bool,
    pub geonrok: bool,
    pub yeokma: bool,
    pub dohwa: bool,
}

impl SpecialFlags {
    pub fn from_shinsal(shinsal: &ShinsalResult, gongmang_void: bool) -> Self {
        Self {
            no_obstruction: !shinsal.has_unlucky() && !gongmang_void,
            geonrok: shinsal.has(names::GEONROK),
            yeokma: shinsal.has(names::YEOKMA),
            dohwa: shinsal.has(names::DOHWA),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInput {
    pub ganzhi: Pillar,
    pub day_master: Element,
    /// Natal day branch.
    pub day_branch: Branch,
    /// Day-master element towards the day's stem element.
    pub relation: ElementRelation,
    pub seun_score: f64,
    pub wolun_score: f64,
    pub flags: SpecialFlags,
    pub best_area: Category,
}

impl CategoryInput {
    /// Relation of the day master towards the day's stem.
    pub fn relation_for(day_master: Element, ganzhi: Pillar) -> ElementRelation {
        ElementRelation::between(day_master, ganzhi.stem_element())
    }
}

fn relation_categories(relation: ElementRelation) -> &'static [Category] {
    match relation {
        ElementRelation::Same => &[Category::Career],
        ElementRelation::GeneratedBy => &[Category::Study, Category::Career],
        ElementRelation::Controls => &[Category::Wealth, Category::Love],
        ElementRelation::Generates => &[Category::Love, Category::Career],
        ElementRelation::ControlledBy => &[Category::Health, Category::Career],
    }
}

/// Ordered, duplicate-free tags. The best area always comes first.
pub fn generate_categories(input: &CategoryInput) -> Vec<Category> {
    let mut tags = vec![input.best_area];
    tags.extend_from_slice(relation_categories(input.relation));

    let f = input.flags;
    if f.no_obstruction {
        tags.push(Category::General);
    }
    if f.geonrok {
        tags.push(Category::Career);
    }
    if f.yeokma {
        tags.push(Category::Travel);
    }
    if f.dohwa {
        tags.push(Category::Love);
    }

    if BranchInteraction::between(input.day_branch, input.ganzhi.branch()) == BranchInteraction::Clash {
        tags.push(Category::Health);
    }

    if input.seun_score >= PROSPEROUS_CYCLE && input.wolun_score >= PROSPEROUS_CYCLE {
        tags.push(Category::Wealth);
    } else if input.seun_score < STRAINED_CYCLE && input.wolun_score < STRAINED_CYCLE {
        tags.push(Category::Health);
    }

    let mut unique = Vec::with_capacity(tags.len());
    for t in tags {
        if !unique.contains(&t) {
            unique.push(t);
        }
    }
    if unique.is_empty() {
        unique.push(Category::General);
    }
    unique
}
