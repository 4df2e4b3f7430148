use serde::{Deserialize, Serialize};

use super::metrics::MetricKind;

/// Direction a metric moved between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// How much a metric contributes to the risk prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub metric: MetricKind,
    /// Display name, e.g. "Contributor Activity".
    pub feature: String,
    /// Share of the prediction, 0–1. All entries sum to 1.
    pub importance: f64,
    pub trend: Trend,
}
