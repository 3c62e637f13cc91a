//! Chart construction errors.

use super::error_code::{self, ErrorCode};
use super::EphemerisError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("latitude {value} outside [-90, 90]")]
    InvalidLatitude { value: f64 },

    #[error("longitude {value} outside [-180, 180]")]
    InvalidLongitude { value: f64 },

    #[error("unknown time zone: {zone}")]
    UnknownZone { zone: String },

    #[error("{system} house computation failed: {reason}")]
    HouseComputation {
        system: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl ErrorCode for ChartError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ephemeris(e) => e.error_code(),
            Self::InvalidLatitude { .. } | Self::InvalidLongitude { .. } => {
                error_code::INVALID_INPUT
            }
            _ => error_code::CHART_ERROR,
        }
    }
}
