//! Feature importance of each metric in the risk prediction.

use vigil_core::models::{FeatureImportance, Trend};
use vigil_core::{MetricKind, Metrics};

/// Static weights, summing to 1.
const WEIGHTS: [(MetricKind, f64); 5] = [
    (MetricKind::ContributorActivity, 0.30),
    (MetricKind::IssueResolutionTime, 0.25),
    (MetricKind::CommitFrequency, 0.20),
    (MetricKind::OpenIssuesRatio, 0.15),
    (MetricKind::CodeChurn, 0.10),
];

/// Importance table, most important first, every trend stable.
pub fn default_importance() -> Vec<FeatureImportance> {
    let mut table: Vec<FeatureImportance> = WEIGHTS
        .iter()
        .map(|&(metric, importance)| FeatureImportance {
            metric,
            feature: metric.display_name().to_owned(),
            importance,
            trend: Trend::Stable,
        })
        .collect();
    table.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    table
}

/// Importance table with each trend taken from two snapshots.
///
/// A metric is increasing or decreasing when its relative change exceeds
/// `tolerance`; a zero previous value counts any change as unbounded.
pub fn importance_with_trends(
    previous: &Metrics,
    current: &Metrics,
    tolerance: f64,
) -> Vec<FeatureImportance> {
    let mut table = default_importance();
    for entry in &mut table {
        entry.trend = trend(previous.value(entry.metric), current.value(entry.metric), tolerance);
    }
    table
}

fn trend(previous: f64, current: f64, tolerance: f64) -> Trend {
    let delta = current - previous;
    if delta == 0.0 {
        return Trend::Stable;
    }
    let relative = if previous == 0.0 {
        f64::INFINITY
    } else {
        delta.abs() / previous.abs()
    };
    if relative <= tolerance {
        Trend::Stable
    } else if delta > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}
