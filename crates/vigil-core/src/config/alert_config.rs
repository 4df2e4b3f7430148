//! Alert configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for alerts raised on high-risk analyses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AlertConfig {
    /// Maximum alerts raised per analysis. Default: 2.
    pub max_per_analysis: Option<usize>,
    /// Scores strictly above this raise critical alerts instead of high. Default: 80.
    pub critical_above: Option<u8>,
}

impl AlertConfig {
    pub fn effective_max_per_analysis(&self) -> usize {
        self.max_per_analysis
            .unwrap_or(constants::DEFAULT_MAX_ALERTS_PER_ANALYSIS)
    }

    pub fn effective_critical_above(&self) -> u8 {
        self.critical_above
            .unwrap_or(constants::DEFAULT_CRITICAL_ALERT_ABOVE)
    }
}
