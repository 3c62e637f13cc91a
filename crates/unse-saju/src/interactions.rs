//! Pairwise relations between earthly branches.

use serde::{Deserialize, Serialize};

use unse_core::ganzhi::Branch;

/// Strongest relation between two branches, from the point of view of a
/// natal branch meeting a visiting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchInteraction {
    /// 육합
    Harmony,
    /// 삼합
    Triad,
    /// 충
    Clash,
    /// 형
    Punishment,
    /// 해
    Harm,
    /// 파
    Break,
    /// 원진
    Resentment,
    Neutral,
}

impl BranchInteraction {
    /// Priority order used by [`BranchInteraction::between`].
    const PRIORITY: [BranchInteraction; 7] = [
        Self::Clash,
        Self::Harmony,
        Self::Triad,
        Self::Punishment,
        Self::Resentment,
        Self::Harm,
        Self::Break,
    ];

    pub fn between(natal: Branch, other: Branch) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.holds(natal, other))
            .unwrap_or(Self::Neutral)
    }

    /// Whether this relation holds for the pair (order-independent).
    pub fn holds(self, a: Branch, b: Branch) -> bool {
        match self {
            Self::Harmony => is_yukhap(a, b),
            Self::Triad => is_samhap(a, b),
            Self::Clash => is_chung(a, b),
            Self::Punishment => is_hyeong(a, b),
            Self::Harm => is_hae(a, b),
            Self::Break => is_pa(a, b),
            Self::Resentment => is_wonjin(a, b),
            Self::Neutral => false,
        }
    }

    /// Score delta applied to luck cycles meeting the natal day branch.
    pub fn score(self) -> f64 {
        match self {
            Self::Harmony => 10.0,
            Self::Triad => 8.0,
            Self::Neutral => 0.0,
            Self::Break => -4.0,
            Self::Harm => -5.0,
            Self::Resentment => -6.0,
            Self::Punishment => -8.0,
            Self::Clash => -12.0,
        }
    }
}

fn idx(b: Branch) -> usize {
    b.index()
}

fn pair_in(a: Branch, b: Branch, table: &[(Branch, Branch)]) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// 육합: 子丑 寅亥 卯戌 辰酉 巳申 午未.
pub fn is_yukhap(a: Branch, b: Branch) -> bool {
    (idx(a) + idx(b)) % 12 == 1
}

/// 삼합: distinct members of one triad (申子辰, 寅午戌, 巳酉丑, 亥卯未).
pub fn is_samhap(a: Branch, b: Branch) -> bool {
    a != b && idx(a) % 4 == idx(b) % 4
}

/// 충: opposite branches.
pub fn is_chung(a: Branch, b: Branch) -> bool {
    (idx(a) + 12 - idx(b)) % 12 == 6
}

const TRIPLE_PUNISHMENTS: [[Branch; 3]; 2] = [
    [Branch::In, Branch::Sa, Branch::Sin],
    [Branch::Chuk, Branch::Sul, Branch::Mi],
];

const SELF_PUNISHING: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

/// 형: 寅巳申 and 丑戌未 groups, 子卯, and self-punishment of 辰午酉亥.
pub fn is_hyeong(a: Branch, b: Branch) -> bool {
    if a == b {
        return SELF_PUNISHING.contains(&a);
    }
    TRIPLE_PUNISHMENTS
        .iter()
        .any(|g| g.contains(&a) && g.contains(&b))
        || pair_in(a, b, &[(Branch::Ja, Branch::Myo)])
}

/// 해: 子未 丑午 寅巳 卯辰 申亥 酉戌.
pub fn is_hae(a: Branch, b: Branch) -> bool {
    (idx(a) + idx(b)) % 12 == 7
}

const PA: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::Jin),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::O),
    (Branch::Sa, Branch::Sin),
    (Branch::Mi, Branch::Sul),
];

/// 파: 子酉 丑辰 寅亥 卯午 巳申 未戌.
pub fn is_pa(a: Branch, b: Branch) -> bool {
    pair_in(a, b, &PA)
}

const WONJIN: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Yu),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

/// 원진: 子未 丑午 寅酉 卯申 辰亥 巳戌.
pub fn is_wonjin(a: Branch, b: Branch) -> bool {
    pair_in(a, b, &WONJIN)
}
