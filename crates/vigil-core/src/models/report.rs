use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature_importance::FeatureImportance;
use super::metrics::Metrics;
use super::recommendation::Recommendation;
use super::risk::{RiskAssessment, RiskLevel, StatusLabel};
use crate::errors::AnalysisError;

/// Full analysis output for one project: assessment plus advisory content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub project_id: String,
    pub timestamp: DateTime<Utc>,
    pub assessment: RiskAssessment,
    pub metrics: Metrics,
    pub warnings: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub feature_importance: Vec<FeatureImportance>,
    /// Name of the scorer that produced the score.
    pub scorer: String,
}

impl AnalysisReport {
    pub fn score(&self) -> u8 {
        self.assessment.score()
    }

    pub fn level(&self) -> RiskLevel {
        self.assessment.level()
    }

    pub fn status_labels(&self) -> &[StatusLabel] {
        self.assessment.status_labels()
    }

    pub fn to_json_pretty(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }
}
