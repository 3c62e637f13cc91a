//! Special stars (신살).
//!
//! Three rule families, all static tables:
//! * the twelve triad stars, keyed by the triad of the natal day branch;
//! * pair relations between two branches (합, 충, 형, 해, 파, 원진);
//! * stem-keyed stars (천을귀인, 건록) keyed by the day master.
//!
//! Rules are non-exclusive. The score is the signed sum of every active
//! rule's weight.

use serde::{Deserialize, Serialize};

use unse_core::ganzhi::{Branch, Stem};
use unse_core::models::{ActiveStar, StarKind};

use crate::interactions::{is_chung, is_hae, is_hyeong, is_pa, is_samhap, is_wonjin, is_yukhap};

pub mod names {
    pub const GEOPSAL: &str = "geopsal";
    pub const JAESAL: &str = "jaesal";
    pub const CHEONSAL: &str = "cheonsal";
    pub const JISAL: &str = "jisal";
    pub const DOHWA: &str = "dohwa";
    pub const WOLSAL: &str = "wolsal";
    pub const MANGSIN: &str = "mangsin";
    pub const JANGSEONG: &str = "jangseong";
    pub const BANAN: &str = "banan";
    pub const YEOKMA: &str = "yeokma";
    pub const YUKHAE: &str = "yukhae";
    pub const HWAGAE: &str = "hwagae";

    pub const YUKHAP: &str = "yukhap";
    pub const SAMHAP: &str = "samhap";
    pub const CHUNG: &str = "chung";
    pub const HYEONG: &str = "hyeong";
    pub const HAE: &str = "hae";
    pub const PA: &str = "pa";
    pub const WONJIN: &str = "wonjin";

    pub const CHEONEUL_GWIIN: &str = "cheoneul-gwiin";
    pub const GEONROK: &str = "geonrok";
}

#[derive(Debug, Clone, Copy)]
struct StarRule {
    name: &'static str,
    kind: StarKind,
    weight: f64,
}

const fn rule(name: &'static str, kind: StarKind, weight: f64) -> StarRule {
    StarRule { name, kind, weight }
}

/// The twelve triad stars in cycle order, starting from 겁살. Star `k`
/// sits on branch `GEOPSAL_BRANCH[triad] + k`.
const TWELVE_STARS: [StarRule; 12] = [
    rule(names::GEOPSAL, StarKind::Unlucky, -6.0),
    rule(names::JAESAL, StarKind::Unlucky, -5.0),
    rule(names::CHEONSAL, StarKind::Unlucky, -4.0),
    rule(names::JISAL, StarKind::Special, 1.0),
    rule(names::DOHWA, StarKind::Special, 1.0),
    rule(names::WOLSAL, StarKind::Unlucky, -4.0),
    rule(names::MANGSIN, StarKind::Unlucky, -5.0),
    rule(names::JANGSEONG, StarKind::Lucky, 6.0),
    rule(names::BANAN, StarKind::Lucky, 5.0),
    rule(names::YEOKMA, StarKind::Special, 2.0),
    rule(names::YUKHAE, StarKind::Unlucky, -4.0),
    rule(names::HWAGAE, StarKind::Special, 1.0),
];

/// 겁살 branch per triad, indexed by `branch.index() % 4`:
/// 申子辰 → 巳, 巳酉丑 → 寅, 寅午戌 → 亥, 亥卯未 → 申.
const GEOPSAL_BRANCH: [Branch; 4] = [Branch::Sa, Branch::In, Branch::Hae, Branch::Sin];

type PairPredicate = fn(Branch, Branch) -> bool;

const PAIR_RULES: [(StarRule, PairPredicate); 7] = [
    (rule(names::YUKHAP, StarKind::Lucky, 8.0), is_yukhap),
    (rule(names::SAMHAP, StarKind::Lucky, 6.0), is_samhap),
    (rule(names::CHUNG, StarKind::Unlucky, -8.0), is_chung),
    (rule(names::HYEONG, StarKind::Unlucky, -6.0), is_hyeong),
    (rule(names::HAE, StarKind::Unlucky, -4.0), is_hae),
    (rule(names::PA, StarKind::Unlucky, -3.0), is_pa),
    (rule(names::WONJIN, StarKind::Unlucky, -5.0), is_wonjin),
];

const CHEONEUL: StarRule = rule(names::CHEONEUL_GWIIN, StarKind::Lucky, 10.0);
const GEONROK: StarRule = rule(names::GEONROK, StarKind::Lucky, 7.0);

/// 천을귀인 branches per day stem 甲..癸.
const CHEONEUL_BRANCHES: [[Branch; 2]; 10] = [
    [Branch::Chuk, Branch::Mi], // 甲
    [Branch::Ja, Branch::Sin],  // 乙
    [Branch::Hae, Branch::Yu],  // 丙
    [Branch::Hae, Branch::Yu],  // 丁
    [Branch::Chuk, Branch::Mi], // 戊
    [Branch::Ja, Branch::Sin],  // 己
    [Branch::Chuk, Branch::Mi], // 庚
    [Branch::In, Branch::O],    // 辛
    [Branch::Myo, Branch::Sa],  // 壬
    [Branch::Myo, Branch::Sa],  // 癸
];

/// 건록 branch per day stem 甲..癸.
const GEONROK_BRANCH: [Branch; 10] = [
    Branch::In,
    Branch::Myo,
    Branch::Sa,
    Branch::O,
    Branch::Sa,
    Branch::O,
    Branch::Sin,
    Branch::Yu,
    Branch::Hae,
    Branch::Ja,
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShinsalResult {
    pub active: Vec<ActiveStar>,
    pub score: f64,
}

impl ShinsalResult {
    fn push(&mut self, r: &StarRule) {
        self.active.push(ActiveStar {
            name: r.name.to_string(),
            kind: r.kind,
        });
        self.score += r.weight;
    }

    pub fn has(&self, name: &str) -> bool {
        self.active.iter().any(|s| s.name == name)
    }

    pub fn has_lucky(&self) -> bool {
        self.active.iter().any(|s| s.kind == StarKind::Lucky)
    }

    pub fn has_unlucky(&self) -> bool {
        self.active.iter().any(|s| s.kind == StarKind::Unlucky)
    }

    /// Append another result's stars and score.
    pub fn merge(mut self, other: ShinsalResult) -> Self {
        self.active.extend(other.active);
        self.score += other.score;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShinsalAnnotator;

impl ShinsalAnnotator {
    /// Branch-keyed stars firing when `target` meets the natal `day_branch`.
    pub fn analyze(day_branch: Branch, target: Branch) -> ShinsalResult {
        let mut result = ShinsalResult::default();

        let start = GEOPSAL_BRANCH[day_branch.index() % 4];
        let k = (target.index() + 12 - start.index()) % 12;
        result.push(&TWELVE_STARS[k]);

        for (r, holds) in PAIR_RULES.iter() {
            if holds(day_branch, target) {
                result.push(r);
            }
        }
        result
    }

    /// Stem-keyed stars firing for the day master on `target`.
    pub fn analyze_stem(day_stem: Stem, target: Branch) -> ShinsalResult {
        let mut result = ShinsalResult::default();
        if CHEONEUL_BRANCHES[day_stem.index()].contains(&target) {
            result.push(&CHEONEUL);
        }
        if GEONROK_BRANCH[day_stem.index()] == target {
            result.push(&GEONROK);
        }
        result
    }

    /// Both rule families for one day.
    pub fn analyze_day(day_stem: Stem, day_branch: Branch, target: Branch) -> ShinsalResult {
        Self::analyze(day_branch, target).merge(Self::analyze_stem(day_stem, target))
    }
}
