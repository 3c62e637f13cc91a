//! House cusps and angles.

use serde::{Deserialize, Serialize};
use tracing::warn;

use unse_core::errors::ChartError;
use unse_core::models::HouseSystem;

use crate::julian::normalize_degrees;
use crate::sidereal::{mean_obliquity, ramc_degrees};

const PLACIDUS_MAX_ITERATIONS: usize = 50;
const PLACIDUS_TOLERANCE: f64 = 1e-7;

/// Cusps of houses 1..=12 plus the two angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
    /// System actually used; differs from the requested one after a
    /// polar-latitude fallback.
    pub system: HouseSystem,
}

/// Ascendant and MC for a sidereal time and latitude (all degrees).
pub fn angles(ramc: f64, obliquity: f64, latitude: f64) -> (f64, f64) {
    let (st, ct) = ramc.to_radians().sin_cos();
    let (se, ce) = obliquity.to_radians().sin_cos();
    let tp = latitude.to_radians().tan();

    let mc = normalize_degrees(st.atan2(ct * ce).to_degrees());
    let asc = normalize_degrees(ct.atan2(-(st * ce + tp * se)).to_degrees());
    (asc, mc)
}

/// Compute cusps for `system` at Julian Day `jd_ut` and a geographic
/// position. Placidus is undefined inside the polar circles and falls back
/// to Porphyry there.
pub fn compute_houses(
    system: HouseSystem,
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
) -> Result<HouseCusps, ChartError> {
    if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
        return Err(ChartError::InvalidLatitude { value: latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
        return Err(ChartError::InvalidLongitude { value: longitude });
    }

    let ramc = ramc_degrees(jd_ut, longitude);
    let eps = mean_obliquity(jd_ut);
    let (asc, mc) = angles(ramc, eps, latitude);

    let (cusps, used) = match system {
        HouseSystem::Placidus => match placidus(ramc, eps, latitude, asc, mc) {
            Some(cusps) => (cusps, HouseSystem::Placidus),
            None => {
                warn!(latitude, "placidus undefined at this latitude, using porphyry");
                (porphyry(asc, mc), HouseSystem::Porphyry)
            }
        },
        HouseSystem::Porphyry => (porphyry(asc, mc), HouseSystem::Porphyry),
        HouseSystem::Equal => (equal(asc), HouseSystem::Equal),
        HouseSystem::WholeSign => (whole_sign(asc), HouseSystem::WholeSign),
    };

    if cusps.iter().any(|c| !c.is_finite()) {
        return Err(ChartError::HouseComputation {
            system: used.as_str(),
            reason: "non-finite cusp",
        });
    }

    Ok(HouseCusps {
        cusps,
        ascendant: asc,
        mc,
        system: used,
    })
}

/// House number (1..=12) containing `longitude`.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let span = normalize_degrees(end - start);
        if normalize_degrees(lon - start) < span {
            return (i + 1) as u8;
        }
    }
    1
}

fn with_opposites(asc: f64, mc: f64, c2: f64, c3: f64, c11: f64, c12: f64) -> [f64; 12] {
    let opp = |x: f64| normalize_degrees(x + 180.0);
    [
        asc,
        c2,
        c3,
        opp(mc),
        opp(c11),
        opp(c12),
        opp(asc),
        opp(c2),
        opp(c3),
        mc,
        c11,
        c12,
    ]
}

fn porphyry(asc: f64, mc: f64) -> [f64; 12] {
    let ic = normalize_degrees(mc + 180.0);
    let upper = normalize_degrees(asc - mc);
    let lower = normalize_degrees(ic - asc);
    with_opposites(
        asc,
        mc,
        normalize_degrees(asc + lower / 3.0),
        normalize_degrees(asc + 2.0 * lower / 3.0),
        normalize_degrees(mc + upper / 3.0),
        normalize_degrees(mc + 2.0 * upper / 3.0),
    )
}

fn equal(asc: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_degrees(asc + 30.0 * i as f64))
}

fn whole_sign(asc: f64) -> [f64; 12] {
    let start = (asc / 30.0).floor() * 30.0;
    std::array::from_fn(|i| normalize_degrees(start + 30.0 * i as f64))
}

/// Ecliptic longitude of the point with right ascension `ra`.
fn ra_to_longitude(ra: f64, eps: f64) -> f64 {
    let (sr, cr) = ra.to_radians().sin_cos();
    normalize_degrees(sr.atan2(cr * eps.to_radians().cos()).to_degrees())
}

/// Ascensional difference of an ecliptic point, or `None` when the point is
/// circumpolar at this latitude.
fn ascensional_difference(longitude: f64, eps: f64, latitude: f64) -> Option<f64> {
    let decl = (eps.to_radians().sin() * longitude.to_radians().sin()).asin();
    let x = latitude.to_radians().tan() * decl.tan();
    if x.abs() > 1.0 {
        return None;
    }
    Some(x.asin().to_degrees())
}

/// Iterate one Placidus cusp. `offset(ad)` gives the cusp's right ascension
/// relative to RAMC for an ascensional difference.
fn placidus_cusp(
    ramc: f64,
    eps: f64,
    latitude: f64,
    start: f64,
    offset: impl Fn(f64) -> f64,
) -> Option<f64> {
    let mut lon = start;
    for _ in 0..PLACIDUS_MAX_ITERATIONS {
        let ad = ascensional_difference(lon, eps, latitude)?;
        let next = ra_to_longitude(ramc + offset(ad), eps);
        let delta = crate::search::normalize_to_pm180(next - lon).abs();
        lon = next;
        if delta < PLACIDUS_TOLERANCE {
            return Some(lon);
        }
    }
    Some(lon)
}

fn placidus(ramc: f64, eps: f64, latitude: f64, asc: f64, mc: f64) -> Option<[f64; 12]> {
    if latitude.abs() >= 90.0 - eps {
        return None;
    }
    // Semi-diurnal arc SDA = 90 + AD, semi-nocturnal arc SNA = 90 - AD.
    let guess = porphyry(asc, mc);
    let c11 = placidus_cusp(ramc, eps, latitude, guess[10], |ad| (90.0 + ad) / 3.0)?;
    let c12 = placidus_cusp(ramc, eps, latitude, guess[11], |ad| 2.0 * (90.0 + ad) / 3.0)?;
    let c2 = placidus_cusp(ramc, eps, latitude, guess[1], |ad| 180.0 - 2.0 * (90.0 - ad) / 3.0)?;
    let c3 = placidus_cusp(ramc, eps, latitude, guess[2], |ad| 180.0 - (90.0 - ad) / 3.0)?;
    Some(with_opposites(asc, mc, c2, c3, c11, c12))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(cusps: &[f64; 12]) -> bool {
        (0..12).all(|i| {
            let gap = normalize_degrees(cusps[(i + 1) % 12] - cusps[i]);
            gap > 0.0 && gap < 180.0
        })
    }

    #[test]
    fn mc_and_ascendant_at_equator_equinox_sidereal_zero() {
        let (asc, mc) = angles(0.0, 23.44, 0.0);
        assert!(mc.abs() < 1e-9 || (mc - 360.0).abs() < 1e-9);
        assert!((asc - 90.0).abs() < 1e-9);
    }

    #[test]
    fn placidus_cusps_run_counterclockwise_at_seoul() {
        let h = compute_houses(HouseSystem::Placidus, 2_448_027.5, 37.5665, 126.978).unwrap();
        assert_eq!(h.system, HouseSystem::Placidus);
        assert!(ascending(&h.cusps));
        assert_eq!(h.cusps[0], h.ascendant);
        assert_eq!(h.cusps[9], h.mc);
    }

    #[test]
    fn placidus_falls_back_to_porphyry_in_the_arctic() {
        let h = compute_houses(HouseSystem::Placidus, 2_451_545.0, 78.22, 15.65).unwrap();
        assert_eq!(h.system, HouseSystem::Porphyry);
    }

    #[test]
    fn equal_houses_are_thirty_degrees_apart() {
        let h = compute_houses(HouseSystem::Equal, 2_451_545.0, 51.5, -0.12).unwrap();
        for i in 0..12 {
            let gap = normalize_degrees(h.cusps[(i + 1) % 12] - h.cusps[i]);
            assert!((gap - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn whole_sign_starts_at_sign_boundary() {
        let h = compute_houses(HouseSystem::WholeSign, 2_451_545.0, 51.5, -0.12).unwrap();
        assert_eq!(h.cusps[0] % 30.0, 0.0);
        assert!(h.cusps[0] <= h.ascendant && h.ascendant < h.cusps[0] + 30.0);
    }

    #[test]
    fn house_assignment_wraps_through_aries() {
        let cusps: [f64; 12] = std::array::from_fn(|i| normalize_degrees(350.0 + 30.0 * i as f64));
        assert_eq!(house_of(355.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
        assert_eq!(house_of(20.0, &cusps), 2);
        assert_eq!(house_of(349.0, &cusps), 12);
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        assert!(matches!(
            compute_houses(HouseSystem::Equal, 2_451_545.0, 95.0, 0.0),
            Err(ChartError::InvalidLatitude { .. })
        ));
        assert!(matches!(
            compute_houses(HouseSystem::Equal, 2_451_545.0, 0.0, 181.0),
            Err(ChartError::InvalidLongitude { .. })
        ));
    }
}
