//! Void branches (공망).
//!
//! The 60-cycle splits into six decades (旬) of ten pillars, each opening
//! on a 甲 stem. Ten stems cover only ten of the twelve branches, so every
//! decade leaves two branches void.

use serde::{Deserialize, Serialize};

use unse_core::ganzhi::{Branch, Pillar};
use unse_core::models::GongmangStatus;

/// Void pair per decade, indexed by `cycle_index / 10`.
const VOID_PAIRS: [[Branch; 2]; 6] = [
    [Branch::Sul, Branch::Hae], // 甲子旬
    [Branch::Sin, Branch::Yu],  // 甲戌旬
    [Branch::O, Branch::Mi],    // 甲申旬
    [Branch::Jin, Branch::Sa],  // 甲午旬
    [Branch::In, Branch::Myo],  // 甲辰旬
    [Branch::Ja, Branch::Chuk], // 甲寅旬
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GongmangResult {
    pub empty_branches: [Branch; 2],
    pub is_target_empty: bool,
}

impl From<GongmangResult> for GongmangStatus {
    fn from(r: GongmangResult) -> Self {
        GongmangStatus {
            empty_branches: r.empty_branches,
            is_void: r.is_target_empty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GongmangAnalyzer;

impl GongmangAnalyzer {
    /// Void branches of `day`'s decade and whether `target` is one of them.
    pub fn analyze(day: Pillar, target: Branch) -> GongmangResult {
        let empty_branches = Self::void_pair(day);
        GongmangResult {
            empty_branches,
            is_target_empty: empty_branches.contains(&target),
        }
    }

    pub fn void_pair(day: Pillar) -> [Branch; 2] {
        VOID_PAIRS[(day.cycle_index() / 10) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_decade_arithmetic() {
        // The decade opens on branch b = (branch - stem) mod 12; void is b+10, b+11.
        for i in 0..60 {
            let p = Pillar::from_cycle_index(i);
            let b = (p.branch().index() + 12 - p.stem().index()) % 12;
            let expected = [Branch::from_index(b + 10), Branch::from_index(b + 11)];
            assert_eq!(GongmangAnalyzer::void_pair(p), expected, "pillar {p}");
        }
    }

    #[test]
    fn gapja_decade_voids_sul_and_hae() {
        let r = GongmangAnalyzer::analyze(Pillar::from_cycle_index(0), Branch::Hae);
        assert_eq!(r.empty_branches, [Branch::Sul, Branch::Hae]);
        assert!(r.is_target_empty);
        assert!(!GongmangAnalyzer::analyze(Pillar::from_cycle_index(9), Branch::Ja).is_target_empty);
    }
}
