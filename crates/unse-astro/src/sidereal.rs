//! Earth orientation: obliquity of the ecliptic and sidereal time.

use crate::julian::{centuries_since_j2000, normalize_degrees, J2000};

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + arcsec / 60.0) / 60.0
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn gmst_degrees(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let theta = 280.460_618_37
        + 360.985_647_366_29 * (jd_ut - J2000)
        + t * t * (0.000_387_933 - t / 38_710_000.0);
    normalize_degrees(theta)
}

/// Local sidereal time (right ascension of the meridian) in degrees.
/// East longitudes are positive.
pub fn ramc_degrees(jd_ut: f64, longitude: f64) -> f64 {
    normalize_degrees(gmst_degrees(jd_ut) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity(J2000) - 23.439_291).abs() < 1e-5);
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-04-10 00:00 UT: 13h10m46.3668s
        let gmst = gmst_degrees(2_446_895.5);
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert!((gmst - expected).abs() < 1e-4);
    }
}
