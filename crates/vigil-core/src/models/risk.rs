//! Risk levels and the per-evaluation risk assessment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::MetricKind;
use super::status::MetricStatus;
use crate::constants::{HIGH_RISK_FLOOR, MAX_RISK_SCORE, MEDIUM_RISK_FLOOR};
use crate::errors::MetricError;

/// Coarse risk bucket, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score. Total over all integers: lower bounds are inclusive,
    /// so 30 is medium and 60 is high; anything above 100 is still high.
    pub fn from_score(score: i64) -> Self {
        if score < i64::from(MEDIUM_RISK_FLOOR) {
            Self::Low
        } else if score < i64::from(HIGH_RISK_FLOOR) {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Band label used on the risk gauge.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(metric, status)` pair of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabel {
    pub metric: MetricKind,
    pub status: MetricStatus,
}

/// Outcome of one evaluation. The level is always the bucket of the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AssessmentRecord")]
pub struct RiskAssessment {
    score: u8,
    level: RiskLevel,
    status_labels: Vec<StatusLabel>,
}

impl RiskAssessment {
    /// Build an assessment; `score` is clamped to 0–100 and the level derived from it.
    pub fn new(score: u8, status_labels: Vec<StatusLabel>) -> Self {
        let score = score.min(MAX_RISK_SCORE);
        Self {
            score,
            level: RiskLevel::from_score(i64::from(score)),
            status_labels,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn status_labels(&self) -> &[StatusLabel] {
        &self.status_labels
    }

    pub fn status_of(&self, metric: MetricKind) -> Option<MetricStatus> {
        self.status_labels
            .iter()
            .find(|label| label.metric == metric)
            .map(|label| label.status)
    }

    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRecord {
    score: u8,
    level: RiskLevel,
    status_labels: Vec<StatusLabel>,
}

impl TryFrom<AssessmentRecord> for RiskAssessment {
    type Error = MetricError;

    fn try_from(record: AssessmentRecord) -> Result<Self, Self::Error> {
        if record.score > MAX_RISK_SCORE {
            return Err(MetricError::invalid(
                "score",
                format!("must be at most 100, got {}", record.score),
            ));
        }
        let assessment = RiskAssessment::new(record.score, record.status_labels);
        if assessment.level != record.level {
            return Err(MetricError::invalid(
                "level",
                format!(
                    "{} does not match score {} ({})",
                    record.level, assessment.score, assessment.level
                ),
            ));
        }
        Ok(assessment)
    }
}
