//! Geocentric position of the Moon from the principal periodic terms of
//! the ELP-2000/82 lunar theory, plus the mean lunar node.
//!
//! Accuracy is a few hundredths of a degree in longitude, well inside the
//! narrowest aspect orb.

use crate::julian::{centuries_since_j2000, normalize_degrees};

const KM_PER_AU: f64 = 149_597_870.7;

/// One periodic term: multiples of D, M, M', F and the amplitude.
struct Term {
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    amp: f64,
}

const fn term(d: f64, m: f64, mp: f64, f: f64, amp: f64) -> Term {
    Term { d, m, mp, f, amp }
}

/// Longitude terms, amplitude in 1e-6 degrees (sine series).
const LONGITUDE: [Term; 24] = [
    term(0.0, 0.0, 1.0, 0.0, 6_288_774.0),
    term(2.0, 0.0, -1.0, 0.0, 1_274_027.0),
    term(2.0, 0.0, 0.0, 0.0, 658_314.0),
    term(0.0, 0.0, 2.0, 0.0, 213_618.0),
    term(0.0, 1.0, 0.0, 0.0, -185_116.0),
    term(0.0, 0.0, 0.0, 2.0, -114_332.0),
    term(2.0, 0.0, -2.0, 0.0, 58_793.0),
    term(2.0, -1.0, -1.0, 0.0, 57_066.0),
    term(2.0, 0.0, 1.0, 0.0, 53_322.0),
    term(2.0, -1.0, 0.0, 0.0, 45_758.0),
    term(0.0, 1.0, -1.0, 0.0, -40_923.0),
    term(1.0, 0.0, 0.0, 0.0, -34_720.0),
    term(0.0, 1.0, 1.0, 0.0, -30_383.0),
    term(2.0, 0.0, 0.0, -2.0, 15_327.0),
    term(0.0, 0.0, 1.0, 2.0, -12_528.0),
    term(0.0, 0.0, 1.0, -2.0, 10_980.0),
    term(4.0, 0.0, -1.0, 0.0, 10_675.0),
    term(0.0, 0.0, 3.0, 0.0, 10_034.0),
    term(4.0, 0.0, -2.0, 0.0, 8_548.0),
    term(2.0, 1.0, -1.0, 0.0, -7_888.0),
    term(2.0, 1.0, 0.0, 0.0, -6_766.0),
    term(1.0, 0.0, -1.0, 0.0, -5_163.0),
    term(1.0, 1.0, 0.0, 0.0, 4_987.0),
    term(2.0, -1.0, 1.0, 0.0, 4_036.0),
];

/// Distance terms, amplitude in metres (cosine series).
const DISTANCE: [Term; 13] = [
    term(0.0, 0.0, 1.0, 0.0, -20_905_355.0),
    term(2.0, 0.0, -1.0, 0.0, -3_699_111.0),
    term(2.0, 0.0, 0.0, 0.0, -2_955_968.0),
    term(0.0, 0.0, 2.0, 0.0, -569_925.0),
    term(0.0, 1.0, 0.0, 0.0, 48_888.0),
    term(0.0, 0.0, 0.0, 2.0, -3_149.0),
    term(2.0, 0.0, -2.0, 0.0, 246_158.0),
    term(2.0, -1.0, -1.0, 0.0, -152_138.0),
    term(2.0, 0.0, 1.0, 0.0, -170_733.0),
    term(2.0, -1.0, 0.0, 0.0, -204_586.0),
    term(0.0, 1.0, -1.0, 0.0, -129_620.0),
    term(1.0, 0.0, 0.0, 0.0, 108_743.0),
    term(0.0, 1.0, 1.0, 0.0, 104_755.0),
];

/// Latitude terms, amplitude in 1e-6 degrees (sine series).
const LATITUDE: [Term; 10] = [
    term(0.0, 0.0, 0.0, 1.0, 5_128_122.0),
    term(0.0, 0.0, 1.0, 1.0, 280_602.0),
    term(0.0, 0.0, 1.0, -1.0, 277_693.0),
    term(2.0, 0.0, 0.0, -1.0, 173_237.0),
    term(2.0, 0.0, -1.0, 1.0, 55_413.0),
    term(2.0, 0.0, -1.0, -1.0, 46_271.0),
    term(2.0, 0.0, 0.0, 1.0, 32_573.0),
    term(0.0, 0.0, 2.0, 1.0, 17_198.0),
    term(2.0, 0.0, 1.0, -1.0, 9_266.0),
    term(0.0, 0.0, 2.0, -1.0, 8_822.0),
];

struct Arguments {
    l: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    /// Eccentricity correction applied to terms involving M.
    e: f64,
    omega: f64,
}

fn arguments(jd: f64) -> Arguments {
    let t = centuries_since_j2000(jd);
    Arguments {
        l: 218.316_447_7 + t * (481_267.881_234_21 - t * 0.001_578_6),
        d: 297.850_192_1 + t * (445_267.111_403_4 - t * 0.001_881_9),
        m: 357.529_109_2 + t * 35_999.050_290_9,
        mp: 134.963_396_4 + t * (477_198.867_505_5 + t * 0.008_741_4),
        f: 93.272_095_0 + t * (483_202.017_523_3 - t * 0.003_653_9),
        e: 1.0 - t * (0.002_516 + t * 0.000_007_4),
        omega: 125.044_547_9 - t * (1_934.136_289_1 - t * 0.002_075_4),
    }
}

fn series(terms: &[Term], a: &Arguments, trig: fn(f64) -> f64) -> f64 {
    terms
        .iter()
        .map(|k| {
            let angle = (k.d * a.d + k.m * a.m + k.mp * a.mp + k.f * a.f).to_radians();
            let ecc = match k.m.abs() as u8 {
                0 => 1.0,
                1 => a.e,
                _ => a.e * a.e,
            };
            k.amp * ecc * trig(angle)
        })
        .sum()
}

/// Apparent ecliptic longitude, latitude (degrees) and distance (AU).
pub fn moon_position(jd: f64) -> (f64, f64, f64) {
    let a = arguments(jd);
    let lon = a.l + series(&LONGITUDE, &a, f64::sin) * 1e-6;
    let lat = series(&LATITUDE, &a, f64::sin) * 1e-6;
    let dist_km = 385_000.56 + series(&DISTANCE, &a, f64::cos) * 1e-3;
    // Nutation in longitude.
    let nutation = -0.004_78 * a.omega.to_radians().sin();
    (normalize_degrees(lon + nutation), lat, dist_km / KM_PER_AU)
}

/// Longitude of the mean ascending lunar node, degrees.
pub fn mean_node_longitude(jd: f64) -> f64 {
    normalize_degrees(arguments(jd).omega)
}
