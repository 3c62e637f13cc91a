//! Top-level engine error.

use super::error_code::{self, ErrorCode};
use super::{CacheError, CalendarError, ChartError, ConfigError, EphemerisError};

/// Errors surfaced by the calendar orchestrator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("computation cancelled after {completed_days} days")]
    Cancelled { completed_days: usize },

    #[error("worker pool could not be built: {reason}")]
    WorkerPool { reason: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Calendar(e) => e.error_code(),
            Self::Ephemeris(e) => e.error_code(),
            Self::Chart(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cache(e) => e.error_code(),
            Self::Cancelled { .. } => error_code::CANCELLED,
            Self::WorkerPool { .. } => error_code::WORKER_POOL_ERROR,
        }
    }
}
