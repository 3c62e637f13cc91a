//! Span definitions per operation: year, day, chart, cache.

/// Span for one full-year computation.
#[macro_export]
macro_rules! year_span {
    ($fingerprint:expr, $year:expr) => {
        tracing::info_span!("unse.year", fingerprint = %$fingerprint, year = $year)
    };
}

/// Span for one day inside a year.
#[macro_export]
macro_rules! day_span {
    ($day_index:expr, $date:expr) => {
        tracing::debug_span!("unse.day", day_index = $day_index, date = %$date)
    };
}

/// Span for chart construction.
#[macro_export]
macro_rules! chart_span {
    ($jd:expr, $house_system:expr) => {
        tracing::debug_span!("unse.chart", jd = $jd, house_system = %$house_system)
    };
}

/// Span for a cache lookup.
#[macro_export]
macro_rules! cache_span {
    ($key:expr) => {
        tracing::debug_span!("unse.cache", key = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const YEAR: &str = "unse.year";
    pub const DAY: &str = "unse.day";
    pub const CHART: &str = "unse.chart";
    pub const CACHE: &str = "unse.cache";
}
