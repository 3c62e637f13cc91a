use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Bodies tracked in natal and transit charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
}

impl Body {
    /// Every body placed in a chart, in display order.
    pub const TRACKED: [Body; 12] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
        Body::SouthNode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::NorthNode => "north-node",
            Self::SouthNode => "south-node",
        }
    }

    /// Lunar nodes are mathematical points, not physical bodies.
    pub fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Porphyry,
    Equal,
    WholeSign,
}

impl HouseSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Porphyry => "porphyry",
            Self::Equal => "equal",
            Self::WholeSign => "whole-sign",
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "placidus" => Ok(Self::Placidus),
            "porphyry" => Ok(Self::Porphyry),
            "equal" => Ok(Self::Equal),
            "whole-sign" | "wholesign" => Ok(Self::WholeSign),
            _ => Err(ConfigError::UnknownHouseSystem {
                name: s.to_string(),
            }),
        }
    }
}

/// Raw ephemeris output for one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Geocentric ecliptic longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub latitude: f64,
    /// Distance from Earth in AU (0 for nodes).
    pub distance: f64,
    /// Longitude speed, degrees per day.
    pub speed: f64,
}

/// A body placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub longitude: f64,
    pub latitude: f64,
    pub speed: f64,
    pub retrograde: bool,
    /// House number 1..=12.
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub instant_utc: DateTime<Utc>,
    pub time_zone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_system: HouseSystem,
}

/// Natal or transit chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub planets: Vec<PlanetPosition>,
    pub ascendant: f64,
    pub mc: f64,
    /// Cusps of houses 1..=12 in order, degrees.
    pub houses: [f64; 12],
    pub meta: ChartMeta,
}

impl Chart {
    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    pub fn longitude_of(&self, body: Body) -> Option<f64> {
        self.planet(body).map(|p| p.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_system_parses_aliases() {
        assert_eq!("Placidus".parse::<HouseSystem>(), Ok(HouseSystem::Placidus));
        assert_eq!("whole_sign".parse::<HouseSystem>(), Ok(HouseSystem::WholeSign));
        assert!("koch-ish".parse::<HouseSystem>().is_err());
    }
}
