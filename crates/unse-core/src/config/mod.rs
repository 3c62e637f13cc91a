//! Engine configuration.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields a
//! fully populated default config. [`EngineConfig::validate`] runs at
//! orchestrator startup; any error there is fatal.

pub mod chart_config;
pub mod ephemeris_config;
pub mod runtime_config;
pub mod saju_config;
pub mod scoring_config;

pub use chart_config::ChartConfig;
pub use ephemeris_config::EphemerisConfig;
pub use runtime_config::{CacheConfig, ObservabilityConfig, WorkerConfig};
pub use saju_config::SajuConfig;
pub use scoring_config::{CompositeWeights, GradeThresholds, ScoringConfig};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ephemeris: EphemerisConfig,
    pub chart: ChartConfig,
    pub saju: SajuConfig,
    pub scoring: ScoringConfig,
    pub workers: WorkerConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Load and validate in one step.
    pub fn load(input: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml(input)?;
        config.validate()?;
        Ok(config)
    }

    /// blake3 digest of the settings that change a day's output: ephemeris
    /// backend and data, house system, saju options, scoring weights and
    /// grade thresholds. Worker, cache and logging settings are left out.
    pub fn output_digest(&self) -> String {
        let output_settings = (
            &self.ephemeris.backend,
            &self.ephemeris.data_path,
            &self.chart,
            &self.saju,
            &self.scoring,
        );
        // Plain data, so serde_json cannot fail here.
        let bytes = serde_json::to_vec(&output_settings).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ephemeris.validate()?;
        self.chart.house_system()?;
        self.scoring.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
