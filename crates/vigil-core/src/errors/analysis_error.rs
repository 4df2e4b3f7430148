//! Analysis errors.

use super::error_code::{self, VigilErrorCode};
use super::{ConfigError, MetricError};

/// Errors that can occur while producing an analysis report.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Metric error: {0}")]
    Metric(#[from] MetricError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No scorer configured for project {project_id}: strategy is external, supply a score")]
    ScoreRequired { project_id: String },
}

impl VigilErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Metric(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::ScoreRequired { .. } => error_code::SCORE_REQUIRED,
        }
    }
}
