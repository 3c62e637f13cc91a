//! Five-Element relation graph.
//!
//! Generation cycle: wood → fire → earth → metal → water → wood.
//! Control cycle: each element controls the element two steps ahead.
//!
//! The tables are `const` data shared by reference; nothing here is ever
//! mutated at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five elements (오행).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// The four directed neighbours of an element in the relation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRelations {
    pub generates: Element,
    pub controls: Element,
    pub generated_by: Element,
    pub controlled_by: Element,
}

/// Relation table indexed by [`Element::index`].
pub const RELATIONS: [ElementRelations; 5] = [
    // Wood
    ElementRelations {
        generates: Element::Fire,
        controls: Element::Earth,
        generated_by: Element::Water,
        controlled_by: Element::Metal,
    },
    // Fire
    ElementRelations {
        generates: Element::Earth,
        controls: Element::Metal,
        generated_by: Element::Wood,
        controlled_by: Element::Water,
    },
    // Earth
    ElementRelations {
        generates: Element::Metal,
        controls: Element::Water,
        generated_by: Element::Fire,
        controlled_by: Element::Wood,
    },
    // Metal
    ElementRelations {
        generates: Element::Water,
        controls: Element::Wood,
        generated_by: Element::Earth,
        controlled_by: Element::Fire,
    },
    // Water
    ElementRelations {
        generates: Element::Wood,
        controls: Element::Fire,
        generated_by: Element::Metal,
        controlled_by: Element::Earth,
    },
];

/// Branch → element, indexed by branch order 子..亥.
///
/// Earth holds the four seasonal-transition branches (丑 辰 未 戌).
pub const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

impl Element {
    /// All elements in generation-cycle order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generation cycle (wood = 0).
    pub fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a generation-cycle position (taken mod 5).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 5]
    }

    /// Neighbour table for this element.
    pub fn relations(self) -> &'static ElementRelations {
        &RELATIONS[self.index()]
    }

    pub fn generates(self) -> Element {
        self.relations().generates
    }

    pub fn controls(self) -> Element {
        self.relations().controls
    }

    pub fn generated_by(self) -> Element {
        self.relations().generated_by
    }

    pub fn controlled_by(self) -> Element {
        self.relations().controlled_by
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a subject element stands towards another element.
///
/// Always read from the subject's point of view: `GeneratedBy` means the
/// other element feeds the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementRelation {
    Same,
    Generates,
    Controls,
    GeneratedBy,
    ControlledBy,
}

impl ElementRelation {
    /// Relation of `subject` towards `other`.
    ///
    /// The five cases partition every ordered pair, so this is total.
    pub fn between(subject: Element, other: Element) -> Self {
        let rel = subject.relations();
        if subject == other {
            Self::Same
        } else if rel.generates == other {
            Self::Generates
        } else if rel.controls == other {
            Self::Controls
        } else if rel.generated_by == other {
            Self::GeneratedBy
        } else {
            Self::ControlledBy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle_order() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn control_is_two_steps_ahead() {
        for e in Element::ALL {
            assert_eq!(e.controls(), Element::from_index(e.index() + 2));
        }
    }

    #[test]
    fn relation_between_is_total() {
        for a in Element::ALL {
            let mut seen = Vec::new();
            for b in Element::ALL {
                seen.push(ElementRelation::between(a, b));
            }
            seen.sort_by_key(|r| *r as u8);
            seen.dedup();
            assert_eq!(seen.len(), 5, "each relation must occur exactly once for {a}");
        }
    }

    #[test]
    fn branch_table_earth_has_four_branches() {
        let earth = BRANCH_ELEMENTS.iter().filter(|e| **e == Element::Earth).count();
        assert_eq!(earth, 4);
    }
}
