use serde::{Deserialize, Serialize};

use super::risk::RiskLevel;
use crate::constants::MAX_RISK_SCORE;
use crate::errors::MetricError;

/// Latest risk standing of one project. The level is always the bucket of
/// the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProjectRiskRecord")]
pub struct ProjectRisk {
    project_id: String,
    name: String,
    score: u8,
    level: RiskLevel,
}

impl ProjectRisk {
    /// `score` is clamped to 0–100 and the level derived from it.
    pub fn new(project_id: impl Into<String>, name: impl Into<String>, score: u8) -> Self {
        let score = score.min(MAX_RISK_SCORE);
        Self {
            project_id: project_id.into(),
            name: name.into(),
            score,
            level: RiskLevel::from_score(i64::from(score)),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRiskRecord {
    project_id: String,
    name: String,
    score: u8,
    #[serde(default)]
    level: Option<RiskLevel>,
}

impl TryFrom<ProjectRiskRecord> for ProjectRisk {
    type Error = MetricError;

    /// Rejects scores above 100 and a stored level that disagrees with the
    /// score. A missing level is derived.
    fn try_from(record: ProjectRiskRecord) -> Result<Self, Self::Error> {
        if record.score > MAX_RISK_SCORE {
            return Err(MetricError::invalid(
                "score",
                format!("must be at most 100, got {}", record.score),
            ));
        }
        let project = ProjectRisk::new(record.project_id, record.name, record.score);
        if let Some(level) = record.level {
            if level != project.level {
                return Err(MetricError::invalid(
                    "level",
                    format!(
                        "{} does not match score {} ({})",
                        level, project.score, project.level
                    ),
                ));
            }
        }
        Ok(project)
    }
}

/// Project counts per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Dashboard statistics across a set of projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_projects: usize,
    /// Mean score rounded to two decimals; 0 for an empty portfolio.
    pub average_risk_score: f64,
    pub risk_distribution: RiskDistribution,
    /// Unacknowledged alerts on the listed projects.
    pub active_alerts: usize,
}
