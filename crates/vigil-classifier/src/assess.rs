use vigil_core::{Metrics, RiskAssessment};

use crate::status::evaluate_all;

/// Build an assessment from a score and a metric snapshot.
///
/// The level comes from the score alone; the status labels come from the
/// metrics alone.
pub fn assess(metrics: &Metrics, score: u8) -> RiskAssessment {
    RiskAssessment::new(score, evaluate_all(metrics))
}
