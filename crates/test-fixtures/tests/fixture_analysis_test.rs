//! Runs every reference analysis through the classifier and checks the
//! recorded outcomes.

use serde::Deserialize;
use test_fixtures::{load_all, load_fixture};
use vigil_classifier::{
    aggregate_warnings, assess, raise_alerts, summarize, RiskClassifier, RuleBasedScorer,
};
use vigil_core::config::AlertConfig;
use vigil_core::models::{Alert, ProjectRisk};
use vigil_core::{MetricStatus, Metrics, RiskLevel, RiskScorer};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisFixture {
    project_id: String,
    project_name: String,
    score: u8,
    metrics: Metrics,
    expected: Expected,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Expected {
    level: RiskLevel,
    statuses: Vec<MetricStatus>,
    warning_count: usize,
    alert_count: usize,
    rule_based_score: u8,
}

#[test]
fn reference_analyses_match() {
    let fixtures: Vec<AnalysisFixture> = load_all("analyses");
    assert_eq!(fixtures.len(), 3);

    for fx in &fixtures {
        let assessment = assess(&fx.metrics, fx.score);
        assert_eq!(assessment.level(), fx.expected.level, "{}", fx.project_name);

        let statuses: Vec<MetricStatus> =
            assessment.status_labels().iter().map(|l| l.status).collect();
        assert_eq!(statuses, fx.expected.statuses, "{}", fx.project_name);

        let warnings = aggregate_warnings(&assessment);
        assert_eq!(warnings.len(), fx.expected.warning_count, "{}", fx.project_name);

        let metric_only: Vec<String> = warnings
            .iter()
            .filter(|w| w.as_str() != vigil_classifier::HIGH_RISK_BANNER)
            .cloned()
            .collect();
        let alerts = raise_alerts(
            &fx.project_id,
            &assessment,
            &metric_only,
            chrono::Utc::now(),
            &AlertConfig::default(),
        );
        assert_eq!(alerts.len(), fx.expected.alert_count, "{}", fx.project_name);

        assert_eq!(
            RuleBasedScorer.score(&fx.metrics),
            fx.expected.rule_based_score,
            "{}",
            fx.project_name
        );
    }
}

#[test]
fn reference_analyses_through_engine() {
    let fixtures: Vec<AnalysisFixture> = load_all("analyses");
    let classifier = RiskClassifier::new();
    for fx in &fixtures {
        let report = classifier.analyze_with_score(&fx.project_id, &fx.metrics, fx.score);
        assert_eq!(report.level(), fx.expected.level);
        assert_eq!(report.warnings.len(), fx.expected.warning_count);

        let json = report.to_json_pretty().unwrap();
        let back = vigil_core::models::AnalysisReport::from_json(&json).unwrap();
        assert_eq!(back, report);
    }
}

#[test]
fn portfolio_summary() {
    let projects: Vec<ProjectRisk> = load_fixture("portfolio/projects.json");
    let alerts: Vec<Alert> = load_fixture("portfolio/alerts.json");

    let summary = summarize(&projects, &alerts);
    assert_eq!(summary.total_projects, 5);
    assert_eq!(summary.average_risk_score, 45.6);
    assert_eq!(summary.risk_distribution.low, 2);
    assert_eq!(summary.risk_distribution.medium, 1);
    assert_eq!(summary.risk_distribution.high, 2);
    // One acknowledged, one on a project outside the portfolio.
    assert_eq!(summary.active_alerts, 3);
}
