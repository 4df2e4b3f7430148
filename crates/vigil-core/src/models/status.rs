use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::MetricKind;

/// Per-metric qualitative label derived from that metric's own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    // Commit frequency
    BelowHealthyThreshold,
    Healthy,
    // Contributor activity
    LowEngagement,
    Moderate,
    HighEngagement,
    // Issue resolution time
    SignificantlyDelayed,
    SlightlyElevated,
    Acceptable,
    // Code churn
    HighInstabilityRisk,
    ModerateChurn,
    Stable,
    // Open issues ratio
    TooManyUnresolved,
    ModeratelyHigh,
    GoodManagement,
}

/// Severity grouping of status labels across metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    /// Healthiest tier of its metric.
    Healthy,
    /// Middle tier.
    Watch,
    /// Worst tier.
    Concern,
}

impl MetricStatus {
    /// The metric this label belongs to.
    pub fn metric(&self) -> MetricKind {
        match self {
            Self::BelowHealthyThreshold | Self::Healthy => MetricKind::CommitFrequency,
            Self::LowEngagement | Self::Moderate | Self::HighEngagement => {
                MetricKind::ContributorActivity
            }
            Self::SignificantlyDelayed | Self::SlightlyElevated | Self::Acceptable => {
                MetricKind::IssueResolutionTime
            }
            Self::HighInstabilityRisk | Self::ModerateChurn | Self::Stable => {
                MetricKind::CodeChurn
            }
            Self::TooManyUnresolved | Self::ModeratelyHigh | Self::GoodManagement => {
                MetricKind::OpenIssuesRatio
            }
        }
    }

    pub fn tier(&self) -> StatusTier {
        match self {
            Self::Healthy
            | Self::HighEngagement
            | Self::Acceptable
            | Self::Stable
            | Self::GoodManagement => StatusTier::Healthy,
            Self::Moderate | Self::SlightlyElevated | Self::ModerateChurn | Self::ModeratelyHigh => {
                StatusTier::Watch
            }
            Self::BelowHealthyThreshold
            | Self::LowEngagement
            | Self::SignificantlyDelayed
            | Self::HighInstabilityRisk
            | Self::TooManyUnresolved => StatusTier::Concern,
        }
    }

    pub fn is_healthiest(&self) -> bool {
        self.tier() == StatusTier::Healthy
    }

    /// Wire form, e.g. "below-healthy-threshold".
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowHealthyThreshold => "below-healthy-threshold",
            Self::Healthy => "healthy",
            Self::LowEngagement => "low-engagement",
            Self::Moderate => "moderate",
            Self::HighEngagement => "high-engagement",
            Self::SignificantlyDelayed => "significantly-delayed",
            Self::SlightlyElevated => "slightly-elevated",
            Self::Acceptable => "acceptable",
            Self::HighInstabilityRisk => "high-instability-risk",
            Self::ModerateChurn => "moderate-churn",
            Self::Stable => "stable",
            Self::TooManyUnresolved => "too-many-unresolved",
            Self::ModeratelyHigh => "moderately-high",
            Self::GoodManagement => "good-management",
        }
    }

    /// Caption shown under a metric card.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::BelowHealthyThreshold => "Below healthy threshold (3+ per day)",
            Self::Healthy => "Within healthy range",
            Self::LowEngagement => "Low contributor engagement",
            Self::Moderate => "Moderate engagement",
            Self::HighEngagement => "High engagement level",
            Self::SignificantlyDelayed => "Significantly delayed",
            Self::SlightlyElevated => "Slightly elevated",
            Self::Acceptable => "Within acceptable range",
            Self::HighInstabilityRisk => "High instability risk",
            Self::ModerateChurn => "Moderate churn",
            Self::Stable => "Stable code changes",
            Self::TooManyUnresolved => "Too many unresolved issues",
            Self::ModeratelyHigh => "Moderately high",
            Self::GoodManagement => "Good issue management",
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions() {
        let captions = [
            (MetricStatus::BelowHealthyThreshold, "Below healthy threshold (3+ per day)"),
            (MetricStatus::Healthy, "Within healthy range"),
            (MetricStatus::LowEngagement, "Low contributor engagement"),
            (MetricStatus::Moderate, "Moderate engagement"),
            (MetricStatus::HighEngagement, "High engagement level"),
            (MetricStatus::SignificantlyDelayed, "Significantly delayed"),
            (MetricStatus::SlightlyElevated, "Slightly elevated"),
            (MetricStatus::Acceptable, "Within acceptable range"),
            (MetricStatus::HighInstabilityRisk, "High instability risk"),
            (MetricStatus::ModerateChurn, "Moderate churn"),
            (MetricStatus::Stable, "Stable code changes"),
            (MetricStatus::TooManyUnresolved, "Too many unresolved issues"),
            (MetricStatus::ModeratelyHigh, "Moderately high"),
            (MetricStatus::GoodManagement, "Good issue management"),
        ];
        for (status, caption) in captions {
            assert_eq!(status.caption(), caption, "{status}");
        }
    }

    #[test]
    fn test_commit_frequency_has_no_watch_tier() {
        let tiers: Vec<StatusTier> = [MetricStatus::BelowHealthyThreshold, MetricStatus::Healthy]
            .iter()
            .map(|s| s.tier())
            .collect();
        assert_eq!(tiers, vec![StatusTier::Concern, StatusTier::Healthy]);
    }

    #[test]
    fn test_wire_form_matches_serde() {
        let json = serde_json::to_string(&MetricStatus::TooManyUnresolved).unwrap();
        assert_eq!(json, "\"too-many-unresolved\"");
        assert_eq!(MetricStatus::TooManyUnresolved.as_str(), "too-many-unresolved");
    }
}
