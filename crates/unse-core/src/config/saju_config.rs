use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    /// Estimate the favourable element from the pillar balance when the
    /// birth profile does not carry one. Off by default: an estimated
    /// yongsin still counts as known for confidence.
    pub estimate_yongsin: bool,
}
