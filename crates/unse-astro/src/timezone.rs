//! Static timezone database.
//!
//! A small table of named zones with coarse bounding boxes and their
//! daylight-saving rules. Positions outside every box resolve to a nautical
//! zone (`UTC+09:00`, 15° of longitude per hour). Callers that know the
//! zone id should pass it explicitly; the boxes only break ties roughly.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

use unse_core::errors::ChartError;
use unse_core::traits::TimezoneDb;

/// Daylight-saving rules. Years before a rule's first modelled year use
/// standard time all year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DstRule {
    None,
    /// From 1981: last Sunday of March to last Sunday of October (September
    /// until 1995), 01:00 UTC.
    European,
    /// British Summer Time from 1972. 1972–1980: the Sunday after the third
    /// Saturday of March to the Sunday after the fourth Saturday of October,
    /// 02:00 GMT. 1981–1995: last Sunday of March to the Sunday after the
    /// fourth Saturday of October (fourth Sunday in 1995), 01:00 UTC. From
    /// 1996 the European rule.
    British,
    /// From 1967: last Sunday of April to last Sunday of October until
    /// 1986, first Sunday of April to last Sunday of October 1987–2006,
    /// second Sunday of March to first Sunday of November from 2007.
    /// Switches at 02:00 local. The 1974–1975 emergency rules are not
    /// modelled.
    American,
}

#[derive(Debug, Clone, Copy)]
struct ZoneRule {
    id: &'static str,
    standard_minutes: i32,
    dst: DstRule,
    lat: (f64, f64),
    lon: (f64, f64),
}

impl ZoneRule {
    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat.0..=self.lat.1).contains(&latitude) && (self.lon.0..=self.lon.1).contains(&longitude)
    }
}

/// Zones in lookup priority order (first containing box wins).
const ZONES: &[ZoneRule] = &[
    ZoneRule { id: "Asia/Seoul", standard_minutes: 540, dst: DstRule::None, lat: (33.0, 38.7), lon: (124.5, 132.0) },
    ZoneRule { id: "Asia/Tokyo", standard_minutes: 540, dst: DstRule::None, lat: (24.0, 46.0), lon: (122.9, 154.0) },
    ZoneRule { id: "Asia/Shanghai", standard_minutes: 480, dst: DstRule::None, lat: (18.0, 54.0), lon: (73.0, 135.0) },
    ZoneRule { id: "Asia/Kolkata", standard_minutes: 330, dst: DstRule::None, lat: (6.0, 36.0), lon: (68.0, 97.5) },
    ZoneRule { id: "Europe/London", standard_minutes: 0, dst: DstRule::British, lat: (49.8, 61.0), lon: (-8.7, 1.8) },
    ZoneRule { id: "Europe/Paris", standard_minutes: 60, dst: DstRule::European, lat: (36.0, 55.0), lon: (-9.6, 24.0) },
    ZoneRule { id: "America/New_York", standard_minutes: -300, dst: DstRule::American, lat: (24.5, 49.0), lon: (-87.5, -66.9) },
    ZoneRule { id: "America/Chicago", standard_minutes: -360, dst: DstRule::American, lat: (25.0, 49.5), lon: (-104.0, -87.5) },
    ZoneRule { id: "America/Los_Angeles", standard_minutes: -480, dst: DstRule::American, lat: (32.0, 49.0), lon: (-125.0, -114.0) },
    ZoneRule { id: "UTC", standard_minutes: 0, dst: DstRule::None, lat: (0.0, -1.0), lon: (0.0, -1.0) },
];

/// Reference [`TimezoneDb`] backed by the static zone table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTimezoneDb;

impl StaticTimezoneDb {
    pub fn new() -> Self {
        Self
    }

    /// Ids of every named zone.
    pub fn zone_ids() -> impl Iterator<Item = &'static str> {
        ZONES.iter().map(|z| z.id)
    }
}

impl TimezoneDb for StaticTimezoneDb {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<String, ChartError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::InvalidLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::InvalidLongitude { value: longitude });
        }
        if let Some(zone) = ZONES.iter().find(|z| z.contains(latitude, longitude)) {
            return Ok(zone.id.to_string());
        }
        let minutes = ((longitude / 15.0).round() as i32) * 60;
        Ok(nautical_id(minutes))
    }

    fn offset_minutes(&self, zone: &str, instant: DateTime<Utc>) -> Result<i32, ChartError> {
        if let Some(rule) = ZONES.iter().find(|z| z.id == zone) {
            let dst = if in_daylight_time(rule, instant) { 60 } else { 0 };
            return Ok(rule.standard_minutes + dst);
        }
        parse_nautical(zone).ok_or_else(|| ChartError::UnknownZone {
            zone: zone.to_string(),
        })
    }
}

/// Convert a local wall-clock time in `zone` to UTC.
///
/// The offset is looked up twice so instants next to a DST switch land on
/// the offset in force at the resulting instant.
pub fn local_to_utc(
    db: &dyn TimezoneDb,
    zone: &str,
    local: NaiveDateTime,
) -> Result<DateTime<Utc>, ChartError> {
    let as_utc = Utc.from_utc_datetime(&local);
    let first = db.offset_minutes(zone, as_utc)?;
    let guess = as_utc - Duration::minutes(i64::from(first));
    let second = db.offset_minutes(zone, guess)?;
    Ok(as_utc - Duration::minutes(i64::from(second)))
}

fn nautical_id(minutes: i32) -> String {
    if minutes == 0 {
        return "UTC".to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
}

fn parse_nautical(zone: &str) -> Option<i32> {
    let rest = zone.strip_prefix("UTC")?;
    if rest.is_empty() {
        return Some(0);
    }
    let (sign, body) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (body.parse::<i32>().ok()?, 0),
    };
    if hours > 14 || !(0..60).contains(&minutes) {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}

fn nth_sunday(year: i32, month: u32, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n as u8)
}

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    nth_sunday(year, month, 5).or_else(|| nth_sunday(year, month, 4))
}

/// The Sunday after the `n`th Saturday of a month.
fn sunday_after_saturday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sat, n).and_then(|d| d.succ_opt())
}

type Window = (Option<NaiveDateTime>, Option<NaiveDateTime>);

/// Start and end dates switching at the same UTC hour.
fn at_utc_hour(dates: Option<(NaiveDate, NaiveDate)>, hour: u32) -> Option<Window> {
    dates.map(|(start, end)| (start.and_hms_opt(hour, 0, 0), end.and_hms_opt(hour, 0, 0)))
}

fn european_window(year: i32) -> Option<Window> {
    let end_month = if year <= 1995 { 9 } else { 10 };
    at_utc_hour(last_sunday(year, 3).zip(last_sunday(year, end_month)), 1)
}

fn british_window(year: i32) -> Option<Window> {
    match year {
        1972..=1980 => at_utc_hour(
            sunday_after_saturday(year, 3, 3).zip(sunday_after_saturday(year, 10, 4)),
            2,
        ),
        1981..=1994 => at_utc_hour(last_sunday(year, 3).zip(sunday_after_saturday(year, 10, 4)), 1),
        1995 => at_utc_hour(last_sunday(year, 3).zip(nth_sunday(year, 10, 4)), 1),
        _ => european_window(year),
    }
}

fn american_window(year: i32, standard_minutes: i32) -> Option<Window> {
    let dates = if year >= 2007 {
        nth_sunday(year, 3, 2).zip(nth_sunday(year, 11, 1))
    } else if year >= 1987 {
        nth_sunday(year, 4, 1).zip(last_sunday(year, 10))
    } else {
        last_sunday(year, 4).zip(last_sunday(year, 10))
    };
    // 02:00 local standard time at the start, 02:00 local daylight time at
    // the end, both expressed in UTC.
    let std_hours = i64::from(standard_minutes) / 60;
    dates.map(|(start, end)| {
        (
            start.and_hms_opt(2, 0, 0).map(|t| t - Duration::hours(std_hours)),
            end.and_hms_opt(1, 0, 0).map(|t| t - Duration::hours(std_hours)),
        )
    })
}

fn in_daylight_time(rule: &ZoneRule, instant: DateTime<Utc>) -> bool {
    let year = instant.year();
    let utc = instant.naive_utc();
    let window = match rule.dst {
        DstRule::None => None,
        DstRule::European if year >= 1981 => european_window(year),
        DstRule::British if year >= 1972 => british_window(year),
        DstRule::American if year >= 1967 => american_window(year, rule.standard_minutes),
        _ => None,
    };
    match window {
        Some((Some(start), Some(end))) => utc >= start && utc < end,
        _ => false,
    }
}
