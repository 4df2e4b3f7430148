//! RiskScorer trait.
//!
//! The overall risk score is not a function of the status labels. It comes
//! from a scorer: the rule-based fallback in `vigil-classifier`, or an
//! outside prediction model wrapped in an implementation of this trait.

use crate::models::Metrics;

/// Produces a 0–100 risk score for a metric snapshot.
pub trait RiskScorer: Send + Sync {
    /// Score the snapshot. Implementations must return a value in 0–100;
    /// callers clamp anything above 100.
    fn score(&self, metrics: &Metrics) -> u8;

    /// Short identifier recorded in analysis reports.
    fn name(&self) -> &str;
}

impl<T: RiskScorer + ?Sized> RiskScorer for Box<T> {
    fn score(&self, metrics: &Metrics) -> u8 {
        (**self).score(metrics)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
