/// Unse crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scoring engine version. Part of every cache key; bump whenever a table,
/// weight, or threshold changes the output of a day.
pub const ENGINE_VERSION: u32 = 1;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u32 = 60;

/// First civil year covered by the analytic ephemeris.
pub const MIN_SUPPORTED_YEAR: i32 = 1800;

/// Last civil year covered by the analytic ephemeris.
pub const MAX_SUPPORTED_YEAR: i32 = 2050;

/// Julian Day (UT) of 1800-01-01 00:00.
pub const MIN_SUPPORTED_JD: f64 = 2_378_496.5;

/// Julian Day (UT) of 2051-01-01 00:00 (exclusive upper bound).
pub const MAX_SUPPORTED_JD: f64 = 2_470_172.5;

/// Length of one daeun (decade luck) cycle in years.
pub const DAEUN_SPAN_YEARS: u32 = 10;

/// Number of daeun cycles derived for a profile.
pub const DAEUN_CYCLE_COUNT: usize = 8;

/// Neutral score used when a cycle has no data (e.g. no active daeun).
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Default number of in-process cached year calendars.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 256;

/// Default cache TTL in seconds (24h).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;

/// Default ephemeris call timeout in milliseconds.
pub const DEFAULT_EPHEMERIS_TIMEOUT_MS: u64 = 2_000;

/// Default worker threads (0 = available parallelism).
pub const DEFAULT_WORKER_THREADS: usize = 0;

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";
