//! # vigil-core
//!
//! Foundation crate for the Vigil early-warning engine.
//! Defines all types, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{AnalysisError, ConfigError, MetricError};
pub use models::{
    MetricKind, MetricStatus, Metrics, RawMetrics, RiskAssessment, RiskLevel, StatusLabel,
    StatusTier,
};
pub use traits::RiskScorer;
