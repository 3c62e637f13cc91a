//! Heliocentric Keplerian orbits for the planets.
//!
//! Mean elements and their secular rates are the JPL "approximate positions
//! of the planets" set valid 1800–2050 (J2000 ecliptic and equinox).
//! Geocentric longitudes are precessed to the equinox of date.

use unse_core::models::Body;

use crate::julian::{centuries_since_j2000, normalize_degrees};

/// General precession in longitude, degrees per Julian century.
const PRECESSION_PER_CENTURY: f64 = 1.396_971_3;

/// Orbital elements at J2000 and their rates per century:
/// semi-major axis (AU), eccentricity, inclination, mean longitude,
/// longitude of perihelion, longitude of ascending node (degrees).
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    pub a: [f64; 2],
    pub e: [f64; 2],
    pub i: [f64; 2],
    pub l: [f64; 2],
    pub peri: [f64; 2],
    pub node: [f64; 2],
}

const fn elements(
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
) -> OrbitalElements {
    OrbitalElements { a, e, i, l, peri, node }
}

pub const MERCURY: OrbitalElements = elements(
    [0.387_099_27, 0.000_000_37],
    [0.205_635_93, 0.000_019_06],
    [7.004_979_02, -0.005_947_49],
    [252.250_323_50, 149_472.674_111_75],
    [77.457_796_28, 0.160_476_89],
    [48.330_765_93, -0.125_340_81],
);

pub const VENUS: OrbitalElements = elements(
    [0.723_335_66, 0.000_003_90],
    [0.006_776_72, -0.000_041_07],
    [3.394_676_05, -0.000_788_90],
    [181.979_099_50, 58_517.815_387_29],
    [131.602_467_18, 0.002_683_29],
    [76.679_842_55, -0.277_694_18],
);

/// Earth-Moon barycenter.
pub const EARTH: OrbitalElements = elements(
    [1.000_002_61, 0.000_005_62],
    [0.016_711_23, -0.000_043_92],
    [-0.000_015_31, -0.012_946_68],
    [100.464_571_66, 35_999.372_449_81],
    [102.937_681_93, 0.323_273_64],
    [0.0, 0.0],
);

pub const MARS: OrbitalElements = elements(
    [1.523_710_34, 0.000_018_47],
    [0.093_394_10, 0.000_078_82],
    [1.849_691_42, -0.008_131_31],
    [-4.553_432_05, 19_140.302_684_99],
    [-23.943_629_59, 0.444_410_88],
    [49.559_538_91, -0.292_573_43],
);

pub const JUPITER: OrbitalElements = elements(
    [5.202_887_00, -0.000_116_07],
    [0.048_386_24, -0.000_132_53],
    [1.304_396_95, -0.001_837_14],
    [34.396_440_51, 3_034.746_127_75],
    [14.728_479_83, 0.212_526_68],
    [100.473_909_09, 0.204_691_06],
);

pub const SATURN: OrbitalElements = elements(
    [9.536_675_94, -0.001_250_60],
    [0.053_861_79, -0.000_509_91],
    [2.485_991_87, 0.001_936_09],
    [49.954_244_23, 1_222.493_622_01],
    [92.598_878_31, -0.418_972_16],
    [113.662_424_48, -0.288_677_94],
);

pub const URANUS: OrbitalElements = elements(
    [19.189_164_64, -0.001_961_76],
    [0.047_257_44, -0.000_043_97],
    [0.772_637_83, -0.002_429_39],
    [313.238_104_51, 428.482_027_85],
    [170.954_276_30, 0.408_052_81],
    [74.016_925_03, 0.042_405_89],
);

pub const NEPTUNE: OrbitalElements = elements(
    [30.069_922_76, 0.000_262_91],
    [0.008_590_48, 0.000_051_05],
    [1.770_043_47, 0.000_353_72],
    [-55.120_029_69, 218.459_453_25],
    [44.964_762_27, -0.322_414_64],
    [131.784_225_74, -0.005_086_64],
);

pub const PLUTO: OrbitalElements = elements(
    [39.482_116_75, -0.000_315_96],
    [0.248_827_30, 0.000_051_70],
    [17.140_012_06, 0.000_048_18],
    [238.929_038_33, 145.207_805_15],
    [224.068_916_29, -0.040_629_42],
    [110.303_936_84, -0.011_834_82],
);

/// Element set for a planet; `None` for the Sun, Moon and nodes.
pub fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        _ => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians).
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric ecliptic rectangular coordinates (AU, J2000 ecliptic).
pub fn heliocentric(el: &OrbitalElements, jd: f64) -> [f64; 3] {
    let t = centuries_since_j2000(jd);
    let at = |p: [f64; 2]| p[0] + p[1] * t;

    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.i).to_radians();
    let mean_longitude = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let arg_peri = (peri - node).to_radians();
    let mean_anomaly = crate::search::normalize_to_pm180(mean_longitude - peri).to_radians();
    let node = node.to_radians();

    let ecc = eccentric_anomaly(mean_anomaly, e);
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric ecliptic longitude, latitude (degrees, equinox of date) and
/// distance (AU) of a planet.
pub fn geocentric(el: &OrbitalElements, jd: f64) -> (f64, f64, f64) {
    let p = heliocentric(el, jd);
    let earth = heliocentric(&EARTH, jd);
    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];

    let horizontal = (x * x + y * y).sqrt();
    let lon = y.atan2(x).to_degrees()
        + PRECESSION_PER_CENTURY * centuries_since_j2000(jd);
    let lat = z.atan2(horizontal).to_degrees();
    let dist = (horizontal * horizontal + z * z).sqrt();
    (normalize_degrees(lon), lat, dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_solver_converges_for_pluto_eccentricity() {
        let e = 0.25;
        let m = 1.2;
        let ecc = eccentric_anomaly(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn earth_is_one_au_from_sun() {
        let r = heliocentric(&EARTH, 2_451_545.0);
        let d = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!((d - 0.983).abs() < 0.01);
    }

    #[test]
    fn only_planets_have_elements() {
        assert!(elements_for(Body::Sun).is_none());
        assert!(elements_for(Body::NorthNode).is_none());
        assert!(elements_for(Body::Pluto).is_some());
    }
}
