//! Pure-Rust analytic ephemeris.

use unse_core::constants::{MAX_SUPPORTED_JD, MIN_SUPPORTED_JD};
use unse_core::errors::EphemerisError;
use unse_core::models::{Body, BodyPosition};
use unse_core::traits::EphemerisBackend;

use crate::julian::normalize_degrees;
use crate::lunar::{mean_node_longitude, moon_position};
use crate::planets::{elements_for, geocentric};
use crate::search::normalize_to_pm180;
use crate::solar::sun_position;

/// Half-width of the central difference used for speeds, in days.
const SPEED_HALF_STEP: f64 = 0.5;

/// Analytic solar, lunar and Keplerian planetary theories.
///
/// Stateless and reentrant; valid for 1800–2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Longitude, latitude and distance without speed.
    fn coordinates(&self, jd: f64, body: Body) -> Result<(f64, f64, f64), EphemerisError> {
        match body {
            Body::Sun => {
                let (lon, r) = sun_position(jd);
                Ok((lon, 0.0, r))
            }
            Body::Moon => Ok(moon_position(jd)),
            Body::NorthNode => Ok((mean_node_longitude(jd), 0.0, 0.0)),
            Body::SouthNode => Ok((normalize_degrees(mean_node_longitude(jd) + 180.0), 0.0, 0.0)),
            planet => elements_for(planet)
                .map(|el| geocentric(el, jd))
                .ok_or_else(|| EphemerisError::UnsupportedBody {
                    body: planet.as_str().to_string(),
                }),
        }
    }
}

impl EphemerisBackend for AnalyticEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        if !(MIN_SUPPORTED_JD..MAX_SUPPORTED_JD).contains(&jd_ut) {
            return Err(EphemerisError::OutOfRange { jd: jd_ut });
        }
        let (longitude, latitude, distance) = self.coordinates(jd_ut, body)?;
        let before = self.coordinates(jd_ut - SPEED_HALF_STEP, body)?.0;
        let after = self.coordinates(jd_ut + SPEED_HALF_STEP, body)?.0;
        let speed = normalize_to_pm180(after - before) / (2.0 * SPEED_HALF_STEP);
        Ok(BodyPosition {
            longitude,
            latitude,
            distance,
            speed,
        })
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "analytic"
    }
}
