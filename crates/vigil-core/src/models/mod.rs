//! Data models shared across the workspace.

pub mod activity;
pub mod alert;
pub mod feature_importance;
pub mod metrics;
pub mod portfolio;
pub mod recommendation;
pub mod report;
pub mod risk;
pub mod status;

pub use activity::RepositoryActivity;
pub use alert::{Alert, AlertSeverity};
pub use feature_importance::{FeatureImportance, Trend};
pub use metrics::{MetricKind, Metrics, RawMetrics};
pub use portfolio::{PortfolioSummary, ProjectRisk, RiskDistribution};
pub use recommendation::{Impact, Recommendation};
pub use report::AnalysisReport;
pub use risk::{RiskAssessment, RiskLevel, StatusLabel};
pub use status::{MetricStatus, StatusTier};
