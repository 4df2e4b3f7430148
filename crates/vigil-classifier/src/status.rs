//! Per-metric threshold evaluation.
//!
//! | Metric                | concern  | watch               | healthy   |
//! |-----------------------|----------|---------------------|-----------|
//! | commit frequency      | `< 3`    | n/a                 | `>= 3`    |
//! | contributor activity  | `< 50`   | `50..70`            | `>= 70`   |
//! | issue resolution time | `> 10`   | `> 7 && <= 10`      | `<= 7`    |
//! | code churn            | `> 400`  | `> 250 && <= 400`   | `<= 250`  |
//! | open issues ratio     | `> 0.30` | `> 0.20 && <= 0.30` | `<= 0.20` |

use vigil_core::constants::{
    CODE_CHURN_HIGH_ABOVE, CODE_CHURN_MODERATE_ABOVE, COMMIT_FREQUENCY_HEALTHY_MIN,
    CONTRIBUTOR_ACTIVITY_HIGH_MIN, CONTRIBUTOR_ACTIVITY_LOW_BELOW, OPEN_ISSUES_HIGH_ABOVE,
    OPEN_ISSUES_MODERATE_ABOVE, RESOLUTION_TIME_DELAYED_ABOVE, RESOLUTION_TIME_ELEVATED_ABOVE,
};
use vigil_core::errors::MetricError;
use vigil_core::{MetricKind, MetricStatus, Metrics, StatusLabel};

/// Label a single metric value using that metric's own thresholds.
///
/// Expects a finite value; [`evaluate_metric_named`] checks that for callers
/// holding untyped input.
pub fn evaluate_metric(metric: MetricKind, value: f64) -> MetricStatus {
    match metric {
        MetricKind::CommitFrequency => {
            if value < COMMIT_FREQUENCY_HEALTHY_MIN {
                MetricStatus::BelowHealthyThreshold
            } else {
                MetricStatus::Healthy
            }
        }
        MetricKind::ContributorActivity => {
            if value < CONTRIBUTOR_ACTIVITY_LOW_BELOW {
                MetricStatus::LowEngagement
            } else if value < CONTRIBUTOR_ACTIVITY_HIGH_MIN {
                MetricStatus::Moderate
            } else {
                MetricStatus::HighEngagement
            }
        }
        MetricKind::IssueResolutionTime => {
            if value > RESOLUTION_TIME_DELAYED_ABOVE {
                MetricStatus::SignificantlyDelayed
            } else if value > RESOLUTION_TIME_ELEVATED_ABOVE {
                MetricStatus::SlightlyElevated
            } else {
                MetricStatus::Acceptable
            }
        }
        MetricKind::CodeChurn => {
            if value > CODE_CHURN_HIGH_ABOVE {
                MetricStatus::HighInstabilityRisk
            } else if value > CODE_CHURN_MODERATE_ABOVE {
                MetricStatus::ModerateChurn
            } else {
                MetricStatus::Stable
            }
        }
        MetricKind::OpenIssuesRatio => {
            if value > OPEN_ISSUES_HIGH_ABOVE {
                MetricStatus::TooManyUnresolved
            } else if value > OPEN_ISSUES_MODERATE_ABOVE {
                MetricStatus::ModeratelyHigh
            } else {
                MetricStatus::GoodManagement
            }
        }
    }
}

/// Label a metric given by name (`"codeChurn"` or `"code_churn"`).
pub fn evaluate_metric_named(name: &str, value: f64) -> Result<MetricStatus, MetricError> {
    let metric: MetricKind = name.parse()?;
    if !value.is_finite() {
        return Err(MetricError::invalid(metric.as_str(), "must be a finite number"));
    }
    Ok(evaluate_metric(metric, value))
}

/// Label every metric of a snapshot, in declaration order.
pub fn evaluate_all(metrics: &Metrics) -> Vec<StatusLabel> {
    metrics
        .iter()
        .map(|(metric, value)| StatusLabel {
            metric,
            status: evaluate_metric(metric, value),
        })
        .collect()
}
