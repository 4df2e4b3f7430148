//! Metric validation errors.

use super::error_code::{self, VigilErrorCode};

/// Errors raised when a metric snapshot or a single metric value is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("Invalid value for {metric}: {reason}")]
    InvalidMetricValue { metric: String, reason: String },

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

impl MetricError {
    pub fn invalid(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetricValue {
            metric: metric.into(),
            reason: reason.into(),
        }
    }
}

impl VigilErrorCode for MetricError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMetricValue { .. } => error_code::INVALID_METRIC,
            Self::UnknownMetric(_) => error_code::UNKNOWN_METRIC,
        }
    }
}
