use proptest::prelude::*;

use unse_core::ganzhi::{Branch, Pillar, Stem};
use unse_core::models::StarKind;
use unse_saju::shinsal::names;
use unse_saju::{BranchInteraction, GongmangAnalyzer, ShinsalAnnotator};

proptest! {
    #[test]
    fn score_is_sum_of_kinds_sign(day in 0usize..12, target in 0usize..12) {
        let r = ShinsalAnnotator::analyze(Branch::from_index(day), Branch::from_index(target));
        prop_assert!(!r.active.is_empty());
        if r.active.iter().all(|s| s.kind == StarKind::Unlucky) {
            prop_assert!(r.score < 0.0);
        }
        if r.active.iter().all(|s| s.kind != StarKind::Unlucky) {
            prop_assert!(r.score > 0.0);
        }
    }

    #[test]
    fn interactions_are_symmetric(a in 0usize..12, b in 0usize..12) {
        let (a, b) = (Branch::from_index(a), Branch::from_index(b));
        prop_assert_eq!(BranchInteraction::between(a, b), BranchInteraction::between(b, a));
    }

    #[test]
    fn void_pair_excludes_decade_branches(index in 0u32..60) {
        let day = Pillar::from_cycle_index(index);
        let result = GongmangAnalyzer::analyze(day, day.branch());
        prop_assert!(!result.is_target_empty);
        prop_assert_eq!(result.empty_branches[1].index(), (result.empty_branches[0].index() + 1) % 12);
    }
}

#[test]
fn yeokma_day_for_water_triad() {
    // 申子辰 natal day branch: 寅 is the travelling horse.
    let r = ShinsalAnnotator::analyze(Branch::Jin, Branch::In);
    assert!(r.has(names::YEOKMA));
}

#[test]
fn harmony_day_is_positive() {
    // 子丑 six-harmony.
    let r = ShinsalAnnotator::analyze(Branch::Ja, Branch::Chuk);
    assert!(r.has(names::YUKHAP));
    assert!(r.has_lucky());
}

#[test]
fn day_analysis_merges_both_families() {
    // 甲子 day meeting 寅: 건록 from the stem, 역마 from the water triad.
    let r = ShinsalAnnotator::analyze_day(Stem::Gap, Branch::Ja, Branch::In);
    assert!(r.has(names::GEONROK));
    assert!(r.has(names::YEOKMA));
    let parts = ShinsalAnnotator::analyze(Branch::Ja, Branch::In).score
        + ShinsalAnnotator::analyze_stem(Stem::Gap, Branch::In).score;
    assert_eq!(r.score, parts);
}

#[test]
fn gapja_decade_voids_sul_hae() {
    let day = Pillar::from_cycle_index(0);
    let r = GongmangAnalyzer::analyze(day, Branch::Sul);
    assert_eq!(r.empty_branches, [Branch::Sul, Branch::Hae]);
    assert!(r.is_target_empty);
}
