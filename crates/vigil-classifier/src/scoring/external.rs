use vigil_core::constants::MAX_RISK_SCORE;
use vigil_core::{Metrics, RiskScorer};

/// A score supplied by an outside prediction model, ignoring the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalScore(u8);

impl ExternalScore {
    pub fn new(score: u8) -> Self {
        Self(score.min(MAX_RISK_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl RiskScorer for ExternalScore {
    fn score(&self, _metrics: &Metrics) -> u8 {
        self.value()
    }

    fn name(&self) -> &str {
        "external"
    }
}
