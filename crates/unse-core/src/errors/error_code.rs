//! Stable error codes surfaced to callers.

/// Every error enum implements this to expose a stable code string that
/// downstream consumers can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the stable error code (e.g., "EPHEMERIS_FAILURE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const INVALID_DATE: &str = "INVALID_DATE";
pub const EPHEMERIS_FAILURE: &str = "EPHEMERIS_FAILURE";
pub const CHART_ERROR: &str = "CHART_ERROR";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const CACHE_BACKEND_ERROR: &str = "CACHE_BACKEND_ERROR";
pub const CANCELLED: &str = "CANCELLED";
pub const WORKER_POOL_ERROR: &str = "WORKER_POOL_ERROR";
