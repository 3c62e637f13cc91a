//! Heavenly Stems, Earthly Branches, and the sexagenary pillar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::{Element, BRANCH_ELEMENTS};
use crate::errors::CalendarError;

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    fn from_parity(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Yang
        } else {
            Self::Yin
        }
    }
}

/// One of the ten Heavenly Stems (천간), in cycle order 甲..癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    const HANJA: [&'static str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at cycle position `index mod 10`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    /// Stems pair up per element: 甲乙 wood, 丙丁 fire, and so on.
    pub fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub fn hanja(self) -> &'static str {
        Self::HANJA[self.index()]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanja())
    }
}

/// One of the twelve Earthly Branches (지지), in cycle order 子..亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    const HANJA: [&'static str; 12] = [
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at cycle position `index mod 12`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Branch `steps` positions ahead (wrapping).
    pub fn offset(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    pub fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub fn hanja(self) -> &'static str {
        Self::HANJA[self.index()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanja())
    }
}

/// A stem-branch pair naming one position of the sexagenary cycle.
///
/// Only pairs of equal polarity exist in the cycle (甲子 yes, 甲丑 no), so
/// construction is fallible and deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPillar")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

#[derive(Deserialize)]
struct RawPillar {
    stem: Stem,
    branch: Branch,
}

impl TryFrom<RawPillar> for Pillar {
    type Error = CalendarError;

    fn try_from(raw: RawPillar) -> Result<Self, Self::Error> {
        Pillar::new(raw.stem, raw.branch)
    }
}

impl Pillar {
    /// Build a pillar, rejecting pairs that never occur in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CalendarError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CalendarError::InvalidPillar {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at cycle position `index mod 60` (0 = 甲子).
    pub fn from_cycle_index(index: u32) -> Self {
        let i = (index % 60) as usize;
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the 60-cycle, recovered from the stem/branch pair.
    pub fn cycle_index(self) -> u32 {
        // The unique i in 0..60 with i ≡ stem (mod 10) and i ≡ branch (mod 12).
        let s = self.stem.index() as u32;
        let b = self.branch.index() as u32;
        (0..6)
            .map(|k| s + 10 * k)
            .find(|i| i % 12 == b)
            .unwrap_or(0)
    }

    /// Pillar `steps` positions later in the cycle (negative = earlier).
    pub fn shifted(self, steps: i64) -> Self {
        let i = (self.cycle_index() as i64 + steps).rem_euclid(60);
        Self::from_cycle_index(i as u32)
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    pub fn stem_element(self) -> Element {
        self.stem.element()
    }

    pub fn branch_element(self) -> Element {
        self.branch.element()
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrips_every_position() {
        for i in 0..60 {
            assert_eq!(Pillar::from_cycle_index(i).cycle_index(), i);
        }
    }

    #[test]
    fn mismatched_polarity_is_rejected() {
        assert!(Pillar::new(Stem::Gap, Branch::Chuk).is_err());
        assert!(Pillar::new(Stem::Gap, Branch::Ja).is_ok());
    }

    #[test]
    fn shifted_wraps_backwards() {
        let gapja = Pillar::from_cycle_index(0);
        assert_eq!(gapja.shifted(-1).cycle_index(), 59);
        assert_eq!(gapja.shifted(61).cycle_index(), 1);
    }

    #[test]
    fn display_uses_hanja() {
        assert_eq!(Pillar::from_cycle_index(0).to_string(), "甲子");
        assert_eq!(Pillar::from_cycle_index(59).to_string(), "癸亥");
    }

    #[test]
    fn deserialize_rejects_invalid_pair() {
        let bad = r#"{"stem":"gap","branch":"chuk"}"#;
        assert!(serde_json::from_str::<Pillar>(bad).is_err());
        let good = r#"{"stem":"gap","branch":"ja"}"#;
        assert!(serde_json::from_str::<Pillar>(good).is_ok());
    }
}
