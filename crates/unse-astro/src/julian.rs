//! Julian Day conversions.
//!
//! Instants are treated as UT. The analytic theories below are evaluated
//! directly at UT; ΔT (about a minute over the supported range) is below
//! their precision.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day of 1970-01-01 00:00 UT.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day (UT) of an instant.
pub fn jd_from_datetime(instant: DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// Instant of a Julian Day (UT), rounded to the millisecond.
pub fn datetime_from_jd(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1_000.0).round() as i64;
    Utc.timestamp_millis_opt(millis).single()
}

/// Julian Day of 00:00 UT on a civil date.
pub fn jd_at_midnight(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    UNIX_EPOCH_JD + (date - epoch).num_days() as f64
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_epoch() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((jd_from_datetime(t) - J2000).abs() < 1e-9);
    }

    #[test]
    fn midnight_matches_datetime() {
        let d = NaiveDate::from_ymd_opt(1987, 4, 10).unwrap();
        let t = Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap();
        assert_eq!(jd_at_midnight(d), jd_from_datetime(t));
        assert_eq!(jd_at_midnight(d), 2_446_895.5);
    }

    #[test]
    fn roundtrip_through_jd() {
        let t = Utc.with_ymd_and_hms(2024, 2, 4, 8, 27, 0).unwrap();
        assert_eq!(datetime_from_jd(jd_from_datetime(t)), Some(t));
    }

    #[test]
    fn normalize_wraps_negative() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }
}
