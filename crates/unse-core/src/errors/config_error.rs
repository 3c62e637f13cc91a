//! Configuration errors. Always fatal at engine startup.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("ephemeris data path not found: {path}")]
    DataPathMissing { path: String },

    #[error("unknown house system: {name}")]
    UnknownHouseSystem { name: String },

    #[error("unknown ephemeris backend: {name}")]
    UnknownBackend { name: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIGURATION_ERROR
    }
}
