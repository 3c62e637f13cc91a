//! Apparent geocentric position of the Sun (low-precision solar theory,
//! about 0.01° over the supported range).

use crate::julian::{centuries_since_j2000, normalize_degrees};

/// Apparent ecliptic longitude (degrees) and Earth-Sun distance (AU).
pub fn sun_position(jd: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jd);

    let l0 = 280.466_46 + t * (36_000.769_83 + t * 0.000_303_2);
    let m = 357.529_11 + t * (35_999.050_29 - t * 0.000_153_7);
    let e = 0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7);

    let m_rad = m.to_radians();
    let center = (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m_rad.sin()
        + (0.019_993 - t * 0.000_101) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + center;
    let anomaly = (m + center).to_radians();
    let radius = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    // Nutation and aberration.
    let omega = (125.04 - 1_934.136 * t).to_radians();
    let apparent = true_longitude - 0.005_69 - 0.004_78 * omega.sin();

    (normalize_degrees(apparent), radius)
}

/// Apparent ecliptic longitude of the Sun in degrees.
pub fn sun_longitude(jd: f64) -> f64 {
    sun_position(jd).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 00:00 TD: apparent longitude 199.90895°, R 0.99766 AU.
        let (lon, r) = sun_position(2_448_908.5);
        assert!((lon - 199.908_95).abs() < 0.01, "lon = {lon}");
        assert!((r - 0.997_66).abs() < 1e-4, "r = {r}");
    }

    #[test]
    fn march_equinox_2024() {
        // 2024-03-20 03:06 UT
        let lon = sun_longitude(2_460_389.629);
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "lon = {lon}");
    }
}
