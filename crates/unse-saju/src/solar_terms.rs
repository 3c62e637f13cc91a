//! Sectional solar terms (절기) that open the Saju months.
//!
//! A jie falls whenever the Sun's apparent longitude reaches `15 + 30k`
//! degrees: 立春 at 315°, 驚蟄 at 345°, 清明 at 15°, and so on.

use chrono::{DateTime, NaiveDate, Utc};

use unse_astro::julian::{datetime_from_jd, jd_at_midnight, jd_from_datetime};
use unse_astro::search::{find_zero_crossing, normalize_to_pm180};
use unse_astro::solar::sun_longitude;
use unse_core::errors::CalendarError;

/// Longitude of 立春, the start of the Saju year.
pub const IPCHUN_LONGITUDE: f64 = 315.0;

/// Search step in days; the Sun never covers 30° in fewer than 29 days.
const STEP_DAYS: f64 = 1.0;
const MAX_STEPS: usize = 40;
const MAX_BISECTIONS: usize = 60;
/// Bisection tolerance: well under a minute.
const TOLERANCE_DAYS: f64 = 1.0 / 2_880.0;

/// Apparent solar longitude at an instant.
pub fn solar_longitude(instant: DateTime<Utc>) -> f64 {
    sun_longitude(jd_from_datetime(instant))
}

/// Index of the Saju month at a solar longitude: 0 = 寅 month (from 立春).
pub fn month_index(longitude: f64) -> usize {
    (((longitude - IPCHUN_LONGITUDE).rem_euclid(360.0) / 30.0) as usize).min(11)
}

/// The next jie strictly after `instant`.
pub fn next_jie(instant: DateTime<Utc>) -> Result<DateTime<Utc>, CalendarError> {
    let jd = jd_from_datetime(instant);
    let lon = sun_longitude(jd);
    let target = 15.0 + 30.0 * (((lon - 15.0) / 30.0).floor() + 1.0);
    crossing(jd, target, STEP_DAYS)
}

/// The most recent jie at or before `instant`.
pub fn previous_jie(instant: DateTime<Utc>) -> Result<DateTime<Utc>, CalendarError> {
    let jd = jd_from_datetime(instant);
    let lon = sun_longitude(jd);
    let target = 15.0 + 30.0 * ((lon - 15.0) / 30.0).floor();
    crossing(jd, target, -STEP_DAYS)
}

/// Instant of 立春 in a Gregorian year.
pub fn ipchun(year: i32) -> Result<DateTime<Utc>, CalendarError> {
    // 立春 always falls between Feb 3 and Feb 5; start two weeks early.
    let start = NaiveDate::from_ymd_opt(year, 1, 20)
        .map(jd_at_midnight)
        .ok_or(CalendarError::SolarTermNotFound { jd: f64::NAN })?;
    crossing(start, IPCHUN_LONGITUDE, STEP_DAYS)
}

fn crossing(jd: f64, target: f64, step: f64) -> Result<DateTime<Utc>, CalendarError> {
    let f = |t: f64| -> Result<f64, CalendarError> { Ok(normalize_to_pm180(sun_longitude(t) - target)) };
    let found = find_zero_crossing(&f, jd, step, MAX_STEPS, MAX_BISECTIONS, TOLERANCE_DAYS)?
        .ok_or(CalendarError::SolarTermNotFound { jd })?;
    datetime_from_jd(found).ok_or(CalendarError::SolarTermNotFound { jd: found })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn month_index_boundaries() {
        assert_eq!(month_index(315.0), 0);
        assert_eq!(month_index(344.9), 0);
        assert_eq!(month_index(345.0), 1);
        assert_eq!(month_index(14.9), 1);
        assert_eq!(month_index(285.0), 11);
        assert_eq!(month_index(314.99), 11);
    }

    #[test]
    fn ipchun_2024() {
        // 2024-02-04 08:27 UT (17:27 KST).
        let t = ipchun(2024).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 2, 4, 8, 27, 0).unwrap();
        assert!((t - expected).num_minutes().abs() <= 20, "{t}");
    }

    #[test]
    fn next_and_previous_bracket_an_instant() {
        let t = Utc.with_ymd_and_hms(1990, 5, 15, 5, 30, 0).unwrap();
        let prev = previous_jie(t).unwrap();
        let next = next_jie(t).unwrap();
        assert!(prev <= t && t < next);
        // 立夏 1990-05-05 18:35 UT, 芒種 1990-06-05 22:46 UT.
        assert_eq!(prev.format("%Y-%m-%d %H").to_string(), "1990-05-05 18");
        assert_eq!(next.format("%Y-%m-%d %H").to_string(), "1990-06-05 22");
    }
}
