//! Advisory configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for recommendations and feature-importance trends.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Maximum recommendations per report. Default: 5.
    pub max_recommendations: Option<usize>,
    /// Relative change below which a metric trend is "stable". Default: 0.05.
    pub trend_tolerance: Option<f64>,
}

impl AdvisoryConfig {
    pub fn effective_max_recommendations(&self) -> usize {
        self.max_recommendations
            .unwrap_or(constants::DEFAULT_MAX_RECOMMENDATIONS)
    }

    pub fn effective_trend_tolerance(&self) -> f64 {
        self.trend_tolerance
            .unwrap_or(constants::DEFAULT_TREND_TOLERANCE)
    }
}
