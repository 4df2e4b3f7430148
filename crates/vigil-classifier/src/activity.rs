//! Metric snapshots derived from raw repository counts.

use vigil_core::config::ActivityConfig;
use vigil_core::constants::{
    ACTIVITY_WINDOW_DAYS, CONTRIBUTOR_ACTIVITY_MAX, FULL_ACTIVITY_CONTRIBUTORS,
    MAX_DERIVED_COMMIT_FREQUENCY,
};
use vigil_core::models::RepositoryActivity;
use vigil_core::{MetricError, Metrics};

/// Derive a snapshot from repository counts.
///
/// Issue resolution time and code churn are not recoverable from counts and
/// come from the configured placeholders, which are validated like any input.
pub fn derive_metrics(
    activity: &RepositoryActivity,
    config: &ActivityConfig,
) -> Result<Metrics, MetricError> {
    let commit_frequency = (f64::from(activity.commits_last_week) / ACTIVITY_WINDOW_DAYS)
        .min(MAX_DERIVED_COMMIT_FREQUENCY);
    let contributor_activity = (f64::from(activity.contributors) / FULL_ACTIVITY_CONTRIBUTORS
        * CONTRIBUTOR_ACTIVITY_MAX)
        .min(CONTRIBUTOR_ACTIVITY_MAX);
    let total_issues = u64::from(activity.open_issues) + u64::from(activity.closed_issues);
    let open_issues_ratio = f64::from(activity.open_issues) / total_issues.max(1) as f64;

    Metrics::new(
        commit_frequency,
        contributor_activity,
        config.effective_resolution_days(),
        config.effective_code_churn(),
        open_issues_ratio,
    )
}
