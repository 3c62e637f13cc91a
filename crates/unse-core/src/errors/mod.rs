//! Error types for every Unse subsystem.
//!
//! Each subsystem owns a `thiserror` enum; [`EngineError`] aggregates them.
//! All enums implement [`ErrorCode`] so callers get a stable
//! machine-readable kind regardless of the message text.

pub mod cache_error;
pub mod calendar_error;
pub mod chart_error;
pub mod config_error;
pub mod engine_error;
pub mod ephemeris_error;
pub mod error_code;

pub use cache_error::CacheError;
pub use calendar_error::CalendarError;
pub use chart_error::ChartError;
pub use config_error::ConfigError;
pub use engine_error::{EngineError, EngineResult};
pub use ephemeris_error::EphemerisError;
pub use error_code::ErrorCode;
