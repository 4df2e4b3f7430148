//! Human-readable warnings derived from an assessment.

use vigil_core::{MetricStatus, RiskAssessment};

/// Leading warning on every high-risk assessment.
pub const HIGH_RISK_BANNER: &str = "High Risk Detected: this project shows strong indicators of \
potential failure. Immediate action is required to prevent project abandonment or significant delays.";

/// Warning text for a status, or `None` for the healthiest tier of a metric.
pub fn metric_warning(status: MetricStatus) -> Option<&'static str> {
    let text = match status {
        MetricStatus::BelowHealthyThreshold => {
            "Low commit frequency - development activity is declining"
        }
        MetricStatus::LowEngagement => {
            "Declining contributor activity detected - engagement is below healthy levels"
        }
        MetricStatus::Moderate => {
            "Moderate contributor engagement - participation could be improved"
        }
        MetricStatus::SignificantlyDelayed => {
            "Delayed issue resolution times - average resolution taking too long"
        }
        MetricStatus::SlightlyElevated => {
            "Issue resolution time slightly elevated - monitor the resolution workflow"
        }
        MetricStatus::HighInstabilityRisk => {
            "High code churn detected - potential instability in codebase"
        }
        MetricStatus::ModerateChurn => {
            "Code churn rate elevated - review whether recent changes are purposeful"
        }
        MetricStatus::TooManyUnresolved => {
            "Increasing number of unresolved issues - backlog is growing"
        }
        MetricStatus::ModeratelyHigh => {
            "Open issues ratio moderately high - consider a triage pass"
        }
        MetricStatus::Healthy
        | MetricStatus::HighEngagement
        | MetricStatus::Acceptable
        | MetricStatus::Stable
        | MetricStatus::GoodManagement => return None,
    };
    Some(text)
}

/// Metric warnings only, one per non-healthy label, in label order.
pub fn metric_warnings(assessment: &RiskAssessment) -> Vec<String> {
    assessment
        .status_labels()
        .iter()
        .filter_map(|label| metric_warning(label.status))
        .map(str::to_owned)
        .collect()
}

/// The banner (high risk only) followed by every metric warning.
pub fn aggregate_warnings(assessment: &RiskAssessment) -> Vec<String> {
    let mut warnings = Vec::with_capacity(assessment.status_labels().len() + 1);
    if assessment.is_high() {
        warnings.push(HIGH_RISK_BANNER.to_owned());
    }
    warnings.extend(metric_warnings(assessment));
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::assess;
    use vigil_core::Metrics;

    #[test]
    fn test_healthiest_tier_has_no_warning() {
        for status in [
            MetricStatus::Healthy,
            MetricStatus::HighEngagement,
            MetricStatus::Acceptable,
            MetricStatus::Stable,
            MetricStatus::GoodManagement,
        ] {
            assert_eq!(metric_warning(status), None, "{status}");
        }
    }

    #[test]
    fn test_high_risk_banner_first() {
        let metrics = Metrics::new(2.3, 40.0, 15.2, 234, 0.34).unwrap();
        let warnings = aggregate_warnings(&assess(&metrics, 78));
        assert_eq!(warnings.len(), 5);
        assert_eq!(warnings[0], HIGH_RISK_BANNER);
        assert_eq!(
            warnings[1],
            "Low commit frequency - development activity is declining"
        );
        assert_eq!(
            warnings[4],
            "Increasing number of unresolved issues - backlog is growing"
        );
    }

    #[test]
    fn test_healthy_low_risk_is_empty() {
        let metrics = Metrics::new(6.7, 88.0, 3.2, 189, 0.02).unwrap();
        assert!(aggregate_warnings(&assess(&metrics, 22)).is_empty());
    }

    #[test]
    fn test_banner_without_metric_warnings() {
        let metrics = Metrics::new(6.7, 88.0, 3.2, 189, 0.02).unwrap();
        assert_eq!(
            aggregate_warnings(&assess(&metrics, 60)),
            vec![HIGH_RISK_BANNER.to_owned()]
        );
    }

    #[test]
    fn test_medium_risk_gets_metric_warnings_only() {
        let metrics = Metrics::new(4.1, 72.0, 6.8, 456, 0.07).unwrap();
        assert_eq!(
            aggregate_warnings(&assess(&metrics, 45)),
            vec!["High code churn detected - potential instability in codebase".to_owned()]
        );
    }
}
