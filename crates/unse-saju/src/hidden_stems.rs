//! Hidden stems (지장간) of each branch: residual, middle, principal qi.

use unse_core::ganzhi::{Branch, Stem};

use Stem::*;

/// Indexed by branch order 子..亥. The last stem is the principal qi.
const HIDDEN: [&[Stem]; 12] = [
    &[Im, Gye],           // 子
    &[Gye, Sin, Gi],      // 丑
    &[Mu, Byeong, Gap],   // 寅
    &[Gap, Eul],          // 卯
    &[Eul, Gye, Mu],      // 辰
    &[Mu, Gyeong, Byeong], // 巳
    &[Byeong, Gi, Jeong], // 午
    &[Jeong, Eul, Gi],    // 未
    &[Mu, Im, Gyeong],    // 申
    &[Gyeong, Sin],       // 酉
    &[Sin, Jeong, Mu],    // 戌
    &[Mu, Gap, Im],       // 亥
];

pub fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN[branch.index()]
}

/// The principal (本氣) hidden stem.
pub fn principal_stem(branch: Branch) -> Stem {
    let stems = hidden_stems(branch);
    stems[stems.len() - 1]
}
