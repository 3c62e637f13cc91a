use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::HouseSystem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// House system name. Default: "placidus".
    pub house_system: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus.as_str().to_string(),
        }
    }
}

impl ChartConfig {
    /// Parsed house system; unknown names are a configuration error.
    pub fn house_system(&self) -> Result<HouseSystem, ConfigError> {
        self.house_system.parse()
    }
}
