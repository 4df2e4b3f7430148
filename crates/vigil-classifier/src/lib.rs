//! # vigil-classifier
//!
//! Maps project metric snapshots to a risk score, a risk level, per-metric
//! status labels, warnings, recommendations, and alerts.
//!
//! Everything here is pure: no I/O and no shared mutable state, so every
//! function can be called from any number of threads.

pub mod activity;
pub mod advisory;
pub mod alerts;
pub mod assess;
pub mod engine;
pub mod portfolio;
pub mod score;
pub mod scoring;
pub mod status;
pub mod warnings;

pub use activity::derive_metrics;
pub use alerts::raise_alerts;
pub use assess::assess;
pub use engine::RiskClassifier;
pub use portfolio::summarize;
pub use score::classify_score;
pub use scoring::{ExternalScore, RuleBasedScorer};
pub use status::{evaluate_all, evaluate_metric, evaluate_metric_named};
pub use warnings::{aggregate_warnings, HIGH_RISK_BANNER};
