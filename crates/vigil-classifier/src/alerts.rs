//! Alerts raised for high-risk analyses.

use chrono::{DateTime, Utc};
use vigil_core::config::AlertConfig;
use vigil_core::models::{Alert, AlertSeverity};
use vigil_core::RiskAssessment;

/// Raise alerts for an assessment.
///
/// Nothing is raised below high risk. Otherwise one alert per metric warning,
/// up to the configured maximum; the banner is not a metric warning and must
/// not be passed in.
pub fn raise_alerts(
    project_id: &str,
    assessment: &RiskAssessment,
    metric_warnings: &[String],
    now: DateTime<Utc>,
    config: &AlertConfig,
) -> Vec<Alert> {
    if !assessment.is_high() {
        return Vec::new();
    }

    let severity = if assessment.score() > config.effective_critical_above() {
        AlertSeverity::Critical
    } else {
        AlertSeverity::High
    };

    let alerts: Vec<Alert> = metric_warnings
        .iter()
        .take(config.effective_max_per_analysis())
        .map(|message| Alert::new(project_id, severity, message.as_str(), now))
        .collect();

    if !alerts.is_empty() {
        tracing::warn!(
            project_id,
            score = assessment.score(),
            ?severity,
            count = alerts.len(),
            "risk alerts raised"
        );
    }
    alerts
}
