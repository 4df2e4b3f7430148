//! Portfolio statistics for the dashboard.

use std::collections::HashSet;

use vigil_core::models::{Alert, PortfolioSummary, ProjectRisk, RiskDistribution};

/// Summarise a set of projects and the alerts raised against them.
///
/// Only unacknowledged alerts whose project is in `projects` are counted.
pub fn summarize(projects: &[ProjectRisk], alerts: &[Alert]) -> PortfolioSummary {
    let mut distribution = RiskDistribution::default();
    for project in projects {
        distribution.record(project.level());
    }

    let average_risk_score = if projects.is_empty() {
        0.0
    } else {
        let total: f64 = projects.iter().map(|p| f64::from(p.score())).sum();
        round2(total / projects.len() as f64)
    };

    let ids: HashSet<&str> = projects.iter().map(|p| p.project_id()).collect();
    let active_alerts = alerts
        .iter()
        .filter(|a| a.is_active() && ids.contains(a.project_id.as_str()))
        .count();

    PortfolioSummary {
        total_projects: projects.len(),
        average_risk_score,
        risk_distribution: distribution,
        active_alerts,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
