//! Tropical zodiac signs and their element tables.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Western elemental triplicity (3 signs each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Triplicity {
    Fire,
    Earth,
    Air,
    Water,
}

impl Triplicity {
    /// Bridge into the Five Elements. Air maps to wood (wind, 巽).
    pub fn five_element(self) -> Element {
        match self {
            Self::Fire => Element::Fire,
            Self::Earth => Element::Earth,
            Self::Air => Element::Wood,
            Self::Water => Element::Water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign → triplicity, indexed by sign order (Aries = 0).
const SIGN_TRIPLICITY: [Triplicity; 12] = [
    Triplicity::Fire,
    Triplicity::Earth,
    Triplicity::Air,
    Triplicity::Water,
    Triplicity::Fire,
    Triplicity::Earth,
    Triplicity::Air,
    Triplicity::Water,
    Triplicity::Fire,
    Triplicity::Earth,
    Triplicity::Air,
    Triplicity::Water,
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign containing an ecliptic longitude (any real value, wrapped).
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = longitude.rem_euclid(360.0);
        Self::ALL[((lon / 30.0) as usize).min(11)]
    }

    pub fn triplicity(self) -> Triplicity {
        SIGN_TRIPLICITY[self.index()]
    }

    pub fn element(self) -> Element {
        self.triplicity().five_element()
    }
}
