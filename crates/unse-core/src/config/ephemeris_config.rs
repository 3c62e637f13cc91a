use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EPHEMERIS_TIMEOUT_MS;
use crate::errors::ConfigError;

/// Ephemeris backends the engine knows how to construct.
pub const KNOWN_BACKENDS: [&str; 1] = ["analytic"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Backend name. Default: "analytic".
    pub backend: String,
    /// Directory of ephemeris data files, for backends that read them.
    /// Must exist when set.
    pub data_path: Option<String>,
    /// Upper bound on a single position call (ms).
    pub call_timeout_ms: u64,
    /// Route every call through a single owner thread.
    pub serialize_calls: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            backend: "analytic".to_string(),
            data_path: None,
            call_timeout_ms: DEFAULT_EPHEMERIS_TIMEOUT_MS,
            serialize_calls: false,
        }
    }
}

impl EphemerisConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !KNOWN_BACKENDS.contains(&self.backend.as_str()) {
            return Err(ConfigError::UnknownBackend {
                name: self.backend.clone(),
            });
        }
        if let Some(path) = &self.data_path {
            if !Path::new(path).exists() {
                return Err(ConfigError::DataPathMissing { path: path.clone() });
            }
        }
        if self.call_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ephemeris.call_timeout_ms".into(),
                message: "must be positive".into(),
            });
        }
        Ok(())
    }
}
