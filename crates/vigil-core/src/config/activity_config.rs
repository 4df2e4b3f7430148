//! Repository-activity derivation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Placeholders for metrics that repository counts cannot supply.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActivityConfig {
    /// Issue resolution time (days) assumed when deriving metrics. Default: 7.0.
    pub default_resolution_days: Option<f64>,
    /// Code churn (lines/day) assumed when deriving metrics. Default: 200.
    pub default_code_churn: Option<u32>,
}

impl ActivityConfig {
    pub fn effective_resolution_days(&self) -> f64 {
        self.default_resolution_days
            .unwrap_or(constants::DEFAULT_RESOLUTION_DAYS)
    }

    pub fn effective_code_churn(&self) -> u32 {
        self.default_code_churn
            .unwrap_or(constants::DEFAULT_CODE_CHURN)
    }
}
