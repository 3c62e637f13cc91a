//! Sexagenary pillar arithmetic.
//!
//! Day boundary: local civil midnight. Day pillars are a function of the
//! local date only. Month and year pillars turn at solar terms and are
//! evaluated at an instant; date-only variants use local noon.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use unse_core::constants::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, SEXAGENARY_CYCLE};
use unse_core::errors::CalendarError;
use unse_core::ganzhi::{Branch, Pillar, Stem};

use crate::solar_terms::{month_index, solar_longitude, IPCHUN_LONGITUDE};

/// 1900-02-20 was a 甲子 day.
const DAY_EPOCH: (i32, u32, u32) = (1900, 2, 20);

/// Years whose number is ≡ 4 (mod 60) are 甲子 years.
const YEAR_EPOCH_OFFSET: i64 = 4;

/// Winter solstice longitude: between it and 立春 the Sun is still in the
/// previous Saju year.
const WINTER_SOLSTICE_LONGITUDE: f64 = 270.0;

/// Pillar arithmetic over the supported date range.
#[derive(Debug, Clone, Copy, Default)]
pub struct GanzhiCalendar;

impl GanzhiCalendar {
    pub fn new() -> Self {
        Self
    }

    fn check_range(date: NaiveDate) -> Result<(), CalendarError> {
        if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDate { date })
        }
    }

    /// Day pillar of a local civil date.
    pub fn day_pillar(&self, date: NaiveDate) -> Result<Pillar, CalendarError> {
        Self::check_range(date)?;
        let epoch = NaiveDate::from_ymd_opt(DAY_EPOCH.0, DAY_EPOCH.1, DAY_EPOCH.2)
            .ok_or(CalendarError::InvalidDate { date })?;
        let days = (date - epoch).num_days();
        let index = days.rem_euclid(i64::from(SEXAGENARY_CYCLE));
        Ok(Pillar::from_cycle_index(index as u32))
    }

    /// Year pillar in force at an instant. The Saju year turns at 立春.
    pub fn year_pillar_at(&self, instant: DateTime<Utc>) -> Result<Pillar, CalendarError> {
        Self::check_range(instant.date_naive())?;
        let year = self.solar_year(instant);
        Ok(Self::year_pillar_of(year))
    }

    /// Pillar of a solar (立春-to-立春) year number.
    pub fn year_pillar_of(solar_year: i32) -> Pillar {
        let index = (i64::from(solar_year) - YEAR_EPOCH_OFFSET).rem_euclid(i64::from(SEXAGENARY_CYCLE));
        Pillar::from_cycle_index(index as u32)
    }

    /// Gregorian year number of the Saju year containing `instant`.
    pub fn solar_year(&self, instant: DateTime<Utc>) -> i32 {
        let year = instant.year();
        let lon = solar_longitude(instant);
        let before_ipchun =
            instant.month() <= 2 && (WINTER_SOLSTICE_LONGITUDE..IPCHUN_LONGITUDE).contains(&lon);
        if before_ipchun {
            year - 1
        } else {
            year
        }
    }

    /// Month pillar in force at an instant. Months turn at the jie terms.
    pub fn month_pillar_at(&self, instant: DateTime<Utc>) -> Result<Pillar, CalendarError> {
        Self::check_range(instant.date_naive())?;
        let m = month_index(solar_longitude(instant));
        let year_stem = self.year_pillar_at(instant)?.stem();
        Ok(Self::month_pillar_of(year_stem, m))
    }

    /// Month pillar for month `m` (0 = 寅 month) of a year with `year_stem`.
    ///
    /// 甲己 years open with 丙寅, 乙庚 with 戊寅, 丙辛 with 庚寅, 丁壬 with
    /// 壬寅, 戊癸 with 甲寅.
    pub fn month_pillar_of(year_stem: Stem, m: usize) -> Pillar {
        let first_stem = (year_stem.index() % 5) * 2 + 2;
        let stem = Stem::from_index(first_stem + m);
        let branch = Branch::In.offset(m);
        // Stem and branch advance together from a yang pair, so parity holds.
        Pillar::new(stem, branch).unwrap_or_else(|_| Pillar::from_cycle_index(0))
    }

    /// Hour pillar for a local time on a day with stem `day_stem`.
    /// 子 hour spans 23:00–01:00; 23:00–24:00 keeps the civil day's stem.
    pub fn hour_pillar(&self, day_stem: Stem, time: NaiveTime) -> Pillar {
        let branch_index = ((time.hour() as usize + 1) / 2) % 12;
        let stem = Stem::from_index(day_stem.index() * 2 + branch_index);
        Pillar::new(stem, Branch::from_index(branch_index))
            .unwrap_or_else(|_| Pillar::from_cycle_index(0))
    }

    /// Month pillar of a local date, evaluated at local noon.
    pub fn month_pillar(&self, date: NaiveDate, utc_offset_minutes: i32) -> Result<Pillar, CalendarError> {
        self.month_pillar_at(local_noon_utc(date, utc_offset_minutes)?)
    }

    /// Year pillar of a local date, evaluated at local noon.
    pub fn year_pillar(&self, date: NaiveDate, utc_offset_minutes: i32) -> Result<Pillar, CalendarError> {
        self.year_pillar_at(local_noon_utc(date, utc_offset_minutes)?)
    }
}

/// UTC instant of local noon on `date` for a fixed offset.
pub fn local_noon_utc(date: NaiveDate, utc_offset_minutes: i32) -> Result<DateTime<Utc>, CalendarError> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or(CalendarError::InvalidDate { date })?;
    Ok(noon.and_utc() - Duration::minutes(i64::from(utc_offset_minutes)))
}
