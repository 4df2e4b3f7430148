//! Corrective actions for the metrics that need them.
//!
//! Each triggered metric contributes a pair of actions, in a fixed metric
//! order. Impact follows position in the final list.

use vigil_core::models::{Impact, Recommendation};
use vigil_core::Metrics;

const CONTRIBUTOR_BELOW: f64 = 50.0;
const OPEN_ISSUES_ABOVE: f64 = 0.3;
const RESOLUTION_ABOVE: f64 = 10.0;
const COMMIT_BELOW: f64 = 3.0;
const CHURN_ABOVE: u32 = 400;

const CONTRIBUTOR_ACTIONS: [&str; 2] = [
    "Increase team collaboration through daily standups or weekly syncs",
    "Consider bringing in additional contributors or redistributing workload",
];
const OPEN_ISSUES_ACTIONS: [&str; 2] = [
    "Prioritize and address open issues - consider triage meeting",
    "Review issue management workflow for bottlenecks",
];
const RESOLUTION_ACTIONS: [&str; 2] = [
    "Optimize bug resolution workflow to reduce average resolution time",
    "Implement automated testing to catch issues earlier",
];
const COMMIT_ACTIONS: [&str; 2] = [
    "Establish regular development cadence with consistent commit schedule",
    "Break down large tasks into smaller, more frequent commits",
];
const CHURN_ACTIONS: [&str; 2] = [
    "Review code review practices to reduce unnecessary changes",
    "Stabilize architecture before adding new features",
];
const HEALTHY_ACTIONS: [&str; 2] = [
    "Project is healthy - maintain current development practices",
    "Continue regular contributions and active issue management",
];

/// Recommend up to `max` actions for a snapshot, most impactful first.
pub fn recommend(metrics: &Metrics, max: usize) -> Vec<Recommendation> {
    let triggered = [
        (metrics.contributor_activity() < CONTRIBUTOR_BELOW, CONTRIBUTOR_ACTIONS),
        (metrics.open_issues_ratio() > OPEN_ISSUES_ABOVE, OPEN_ISSUES_ACTIONS),
        (metrics.issue_resolution_time() > RESOLUTION_ABOVE, RESOLUTION_ACTIONS),
        (metrics.commit_frequency() < COMMIT_BELOW, COMMIT_ACTIONS),
        (metrics.code_churn() > CHURN_ABOVE, CHURN_ACTIONS),
    ];

    let mut messages: Vec<&str> = triggered
        .iter()
        .filter(|(applies, _)| *applies)
        .flat_map(|(_, actions)| actions.iter().copied())
        .collect();

    if messages.is_empty() {
        messages.extend(HEALTHY_ACTIONS);
    }

    messages
        .into_iter()
        .take(max)
        .enumerate()
        .map(|(index, message)| Recommendation {
            message: message.to_owned(),
            impact: Impact::for_position(index),
        })
        .collect()
}
