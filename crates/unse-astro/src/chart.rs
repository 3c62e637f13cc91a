//! Natal and transit chart construction.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use unse_core::chart_span;
use unse_core::errors::ChartError;
use unse_core::models::{Body, Chart, ChartMeta, HouseSystem, PlanetPosition};
use unse_core::traits::TimezoneDb;

use crate::ephemeris::EphemerisAdapter;
use crate::houses::{compute_houses, house_of};
use crate::julian::jd_from_datetime;
use crate::timezone::local_to_utc;

/// Builds charts for an instant and place. Shared by every worker; holds
/// only shared collaborators.
pub struct TransitChartBuilder {
    ephemeris: Arc<EphemerisAdapter>,
    timezones: Arc<dyn TimezoneDb>,
    house_system: HouseSystem,
}

impl TransitChartBuilder {
    pub fn new(
        ephemeris: Arc<EphemerisAdapter>,
        timezones: Arc<dyn TimezoneDb>,
        house_system: HouseSystem,
    ) -> Self {
        Self {
            ephemeris,
            timezones,
            house_system,
        }
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    pub fn timezones(&self) -> &dyn TimezoneDb {
        self.timezones.as_ref()
    }

    /// Zone id for a place: the explicit one when given, otherwise resolved
    /// from coordinates.
    pub fn zone_for(
        &self,
        zone: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, ChartError> {
        match zone {
            Some(z) => Ok(z.to_string()),
            None => self.timezones.resolve(latitude, longitude),
        }
    }

    /// Chart for a local wall-clock time. `time = None` uses local noon.
    pub fn build_local(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
        zone: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Chart, ChartError> {
        validate_coordinates(latitude, longitude)?;
        let zone = self.zone_for(zone, latitude, longitude)?;
        let local = NaiveDateTime::new(date, time.unwrap_or_else(noon));
        let instant = local_to_utc(self.timezones.as_ref(), &zone, local)?;
        self.build_at(instant, latitude, longitude, zone)
    }

    /// Chart for a UTC instant.
    pub fn build_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        zone: String,
    ) -> Result<Chart, ChartError> {
        validate_coordinates(latitude, longitude)?;
        let jd = jd_from_datetime(instant);
        let _span = chart_span!(jd, self.house_system).entered();

        let houses = compute_houses(self.house_system, jd, latitude, longitude)?;

        let planets = Body::TRACKED
            .iter()
            .map(|&body| {
                let pos = self.ephemeris.position(jd, body)?;
                Ok(PlanetPosition {
                    body,
                    longitude: pos.longitude,
                    latitude: pos.latitude,
                    speed: pos.speed,
                    retrograde: pos.speed < 0.0,
                    house: house_of(pos.longitude, &houses.cusps),
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        debug!(jd, bodies = planets.len(), system = %houses.system, "chart built");

        Ok(Chart {
            planets,
            ascendant: houses.ascendant,
            mc: houses.mc,
            houses: houses.cusps,
            meta: ChartMeta {
                instant_utc: instant,
                time_zone: zone,
                latitude,
                longitude,
                house_system: houses.system,
            },
        })
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ChartError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ChartError::InvalidLatitude { value: latitude });
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ChartError::InvalidLongitude { value: longitude });
    }
    Ok(())
}
