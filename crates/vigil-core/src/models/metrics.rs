//! Project metric snapshots.
//!
//! [`RawMetrics`] is what arrives over the wire: every field optional, every
//! value an `f64`. [`Metrics`] is the validated form; it can only be built
//! through [`Metrics::new`] or a successful conversion from [`RawMetrics`],
//! so every value the classifier sees is finite and in range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::MetricError;

/// The five project-health signals, in fixed declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    #[serde(alias = "commit_frequency")]
    CommitFrequency,
    #[serde(alias = "contributor_activity")]
    ContributorActivity,
    #[serde(alias = "issue_resolution_time")]
    IssueResolutionTime,
    #[serde(alias = "code_churn")]
    CodeChurn,
    #[serde(alias = "open_issues_ratio")]
    OpenIssuesRatio,
}

impl MetricKind {
    /// All metrics in declaration order. Warnings and labels follow this order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::CommitFrequency,
        MetricKind::ContributorActivity,
        MetricKind::IssueResolutionTime,
        MetricKind::CodeChurn,
        MetricKind::OpenIssuesRatio,
    ];

    /// Wire name (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommitFrequency => "commitFrequency",
            Self::ContributorActivity => "contributorActivity",
            Self::IssueResolutionTime => "issueResolutionTime",
            Self::CodeChurn => "codeChurn",
            Self::OpenIssuesRatio => "openIssuesRatio",
        }
    }

    pub fn snake_case(&self) -> &'static str {
        match self {
            Self::CommitFrequency => "commit_frequency",
            Self::ContributorActivity => "contributor_activity",
            Self::IssueResolutionTime => "issue_resolution_time",
            Self::CodeChurn => "code_churn",
            Self::OpenIssuesRatio => "open_issues_ratio",
        }
    }

    /// Human-readable name, e.g. "Commit Frequency".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CommitFrequency => "Commit Frequency",
            Self::ContributorActivity => "Contributor Activity",
            Self::IssueResolutionTime => "Issue Resolution Time",
            Self::CodeChurn => "Code Churn",
            Self::OpenIssuesRatio => "Open Issues Ratio",
        }
    }

    /// Check that `value` is usable for this metric.
    ///
    /// Rejects non-finite and negative values, contributor activity above 100,
    /// open-issues ratios above 1, and fractional code churn.
    pub fn validate_value(&self, value: f64) -> Result<f64, MetricError> {
        if !value.is_finite() {
            return Err(MetricError::invalid(self.as_str(), "must be a finite number"));
        }
        if value < 0.0 {
            return Err(MetricError::invalid(
                self.as_str(),
                format!("must be non-negative, got {value}"),
            ));
        }
        match self {
            Self::ContributorActivity if value > constants::CONTRIBUTOR_ACTIVITY_MAX => {
                Err(MetricError::invalid(
                    self.as_str(),
                    format!("must be at most 100, got {value}"),
                ))
            }
            Self::OpenIssuesRatio if value > constants::OPEN_ISSUES_RATIO_MAX => {
                Err(MetricError::invalid(
                    self.as_str(),
                    format!("must be at most 1, got {value}"),
                ))
            }
            Self::CodeChurn if value.fract() != 0.0 => Err(MetricError::invalid(
                self.as_str(),
                format!("must be a whole number, got {value}"),
            )),
            Self::CodeChurn if value > f64::from(u32::MAX) => Err(MetricError::invalid(
                self.as_str(),
                format!("is out of range, got {value}"),
            )),
            _ => Ok(value),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    /// Accepts both the camelCase wire name and the snake_case form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.snake_case() == s)
            .ok_or_else(|| MetricError::UnknownMetric(s.to_string()))
    }
}

/// Metric snapshot as received from callers. Any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMetrics {
    #[serde(alias = "commit_frequency")]
    pub commit_frequency: Option<f64>,
    #[serde(alias = "contributor_activity")]
    pub contributor_activity: Option<f64>,
    #[serde(alias = "issue_resolution_time")]
    pub issue_resolution_time: Option<f64>,
    #[serde(alias = "code_churn")]
    pub code_churn: Option<f64>,
    #[serde(alias = "open_issues_ratio")]
    pub open_issues_ratio: Option<f64>,
}

impl RawMetrics {
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::CommitFrequency => self.commit_frequency,
            MetricKind::ContributorActivity => self.contributor_activity,
            MetricKind::IssueResolutionTime => self.issue_resolution_time,
            MetricKind::CodeChurn => self.code_churn,
            MetricKind::OpenIssuesRatio => self.open_issues_ratio,
        }
    }

    /// Validate every field. The first offending metric in declaration order
    /// is reported.
    pub fn validate(&self) -> Result<Metrics, MetricError> {
        let require = |kind: MetricKind| -> Result<f64, MetricError> {
            let value = self
                .get(kind)
                .ok_or_else(|| MetricError::invalid(kind.as_str(), "is missing"))?;
            kind.validate_value(value)
        };

        Ok(Metrics {
            commit_frequency: require(MetricKind::CommitFrequency)?,
            contributor_activity: require(MetricKind::ContributorActivity)?,
            issue_resolution_time: require(MetricKind::IssueResolutionTime)?,
            code_churn: require(MetricKind::CodeChurn)? as u32,
            open_issues_ratio: require(MetricKind::OpenIssuesRatio)?,
        })
    }
}

impl From<Metrics> for RawMetrics {
    fn from(m: Metrics) -> Self {
        Self {
            commit_frequency: Some(m.commit_frequency),
            contributor_activity: Some(m.contributor_activity),
            issue_resolution_time: Some(m.issue_resolution_time),
            code_churn: Some(f64::from(m.code_churn)),
            open_issues_ratio: Some(m.open_issues_ratio),
        }
    }
}

/// A validated metric snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMetrics")]
pub struct Metrics {
    commit_frequency: f64,
    contributor_activity: f64,
    issue_resolution_time: f64,
    code_churn: u32,
    open_issues_ratio: f64,
}

impl Metrics {
    pub fn new(
        commit_frequency: f64,
        contributor_activity: f64,
        issue_resolution_time: f64,
        code_churn: u32,
        open_issues_ratio: f64,
    ) -> Result<Self, MetricError> {
        RawMetrics {
            commit_frequency: Some(commit_frequency),
            contributor_activity: Some(contributor_activity),
            issue_resolution_time: Some(issue_resolution_time),
            code_churn: Some(f64::from(code_churn)),
            open_issues_ratio: Some(open_issues_ratio),
        }
        .validate()
    }

    /// Commits per day.
    pub fn commit_frequency(&self) -> f64 {
        self.commit_frequency
    }

    /// Percentage, 0–100.
    pub fn contributor_activity(&self) -> f64 {
        self.contributor_activity
    }

    /// Days.
    pub fn issue_resolution_time(&self) -> f64 {
        self.issue_resolution_time
    }

    /// Lines changed per day.
    pub fn code_churn(&self) -> u32 {
        self.code_churn
    }

    /// Fraction, 0–1.
    pub fn open_issues_ratio(&self) -> f64 {
        self.open_issues_ratio
    }

    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::CommitFrequency => self.commit_frequency,
            MetricKind::ContributorActivity => self.contributor_activity,
            MetricKind::IssueResolutionTime => self.issue_resolution_time,
            MetricKind::CodeChurn => f64::from(self.code_churn),
            MetricKind::OpenIssuesRatio => self.open_issues_ratio,
        }
    }

    /// `(metric, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, f64)> + '_ {
        MetricKind::ALL.into_iter().map(|kind| (kind, self.value(kind)))
    }
}

impl TryFrom<RawMetrics> for Metrics {
    type Error = MetricError;

    fn try_from(raw: RawMetrics) -> Result<Self, Self::Error> {
        raw.validate()
    }
}
