//! Ephemeris errors.

use super::error_code::{self, ErrorCode};

/// Failures of an ephemeris position lookup.
///
/// Carries only typed fields; backend diagnostic text never reaches here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    #[error("unsupported body: {body}")]
    UnsupportedBody { body: String },

    #[error("julian day {jd} outside supported range")]
    OutOfRange { jd: f64 },

    #[error("ephemeris backend fault (code {code})")]
    NativeFault { code: i32 },

    #[error("ephemeris call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("ephemeris worker unavailable")]
    Unavailable,
}

impl ErrorCode for EphemerisError {
    fn error_code(&self) -> &'static str {
        error_code::EPHEMERIS_FAILURE
    }
}
