use vigil_core::RiskLevel;

/// Classify a risk score: `< 30` low, `30..60` medium, `>= 60` high.
///
/// Total over all integers. Out-of-range input is bucketed by the same
/// inequalities, so negative scores are low and anything past 100 is high.
pub fn classify_score(score: i64) -> RiskLevel {
    RiskLevel::from_score(score)
}
