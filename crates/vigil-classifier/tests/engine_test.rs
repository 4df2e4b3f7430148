use vigil_classifier::{derive_metrics, RiskClassifier, HIGH_RISK_BANNER};
use vigil_core::errors::VigilErrorCode;
use vigil_core::models::{Impact, RepositoryActivity, Trend};
use vigil_core::{AnalysisError, MetricKind, MetricStatus, Metrics, RawMetrics, RiskLevel, VigilConfig};

fn struggling() -> Metrics {
    Metrics::new(2.3, 40.0, 15.2, 234, 0.34).unwrap()
}

#[test]
fn report_contents_for_struggling_project() {
    let report = RiskClassifier::new().analyze("ecommerce", &struggling()).unwrap();

    assert_eq!(report.project_id, "ecommerce");
    assert_eq!(report.level(), RiskLevel::High);
    assert_eq!(report.warnings[0], HIGH_RISK_BANNER);
    assert_eq!(report.warnings.len(), 5);
    assert_eq!(report.recommendations[0].impact, Impact::Critical);
    assert_eq!(report.feature_importance[0].metric, MetricKind::ContributorActivity);
    assert_eq!(
        report.assessment.status_of(MetricKind::IssueResolutionTime),
        Some(MetricStatus::SignificantlyDelayed)
    );
}

#[test]
fn config_drives_limits() {
    let config = VigilConfig::from_toml(
        r#"
[advisory]
max_recommendations = 3

[alerts]
max_per_analysis = 1
critical_above = 60
"#,
    )
    .unwrap();
    let classifier = RiskClassifier::from_config(config);
    let report = classifier.analyze("p", &struggling()).unwrap();
    assert_eq!(report.recommendations.len(), 3);

    let alerts = classifier.alerts_for(&report);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, vigil_core::models::AlertSeverity::Critical);
}

#[test]
fn external_strategy_from_toml() {
    let config = VigilConfig::from_toml("[scoring]\nstrategy = \"external\"\n").unwrap();
    let classifier = RiskClassifier::from_config(config);
    assert_eq!(classifier.scorer_name(), None);

    let err = classifier.analyze("p-7", &struggling()).unwrap_err();
    assert_eq!(err.error_code(), "SCORE_REQUIRED");
    assert!(matches!(err, AnalysisError::ScoreRequired { ref project_id } if project_id == "p-7"));
}

#[test]
fn trends_from_previous_snapshot() {
    let previous = Metrics::new(5.0, 80.0, 6.0, 200, 0.1).unwrap();
    let report = RiskClassifier::new()
        .analyze_since("p", &previous, &struggling())
        .unwrap();
    let trend_of = |m: MetricKind| {
        report
            .feature_importance
            .iter()
            .find(|f| f.metric == m)
            .map(|f| f.trend)
    };
    assert_eq!(trend_of(MetricKind::CommitFrequency), Some(Trend::Decreasing));
    assert_eq!(trend_of(MetricKind::IssueResolutionTime), Some(Trend::Increasing));
    assert_eq!(trend_of(MetricKind::CodeChurn), Some(Trend::Increasing));
}

#[test]
fn derived_metrics_feed_analysis() {
    let activity = RepositoryActivity {
        commits_last_week: 7,
        contributors: 1,
        open_issues: 23,
        closed_issues: 45,
    };
    let metrics = derive_metrics(&activity, &Default::default()).unwrap();
    let report = RiskClassifier::new().analyze("derived", &metrics).unwrap();
    // 1/day: +25, 20%: +30, ratio 0.338: +5.
    assert_eq!(report.score(), 60);
    assert_eq!(report.level(), RiskLevel::High);
}

#[test]
fn raw_json_input_validated() {
    let raw: RawMetrics = serde_json::from_str(
        r#"{"commit_frequency": 2.3, "contributorActivity": 40, "issueResolutionTime": 15.2, "codeChurn": 234}"#,
    )
    .unwrap();
    let err = raw.validate().unwrap_err();
    assert!(err.to_string().contains("openIssuesRatio"), "{err}");

    let bad: Result<Metrics, _> = serde_json::from_str(
        r#"{"commitFrequency": 2.3, "contributorActivity": 140, "issueResolutionTime": 15.2, "codeChurn": 234, "openIssuesRatio": 0.3}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn report_json_round_trip() {
    let report = RiskClassifier::new().analyze("p", &struggling()).unwrap();
    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("\"projectId\": \"p\""));
    assert!(json.contains("\"level\": \"high\""));
    let back = vigil_core::models::AnalysisReport::from_json(&json).unwrap();
    assert_eq!(back, report);

    let tampered = json.replace("\"level\": \"high\"", "\"level\": \"low\"");
    assert!(vigil_core::models::AnalysisReport::from_json(&tampered).is_err());
}

#[test]
fn batch_preserves_order() {
    let projects = vec![
        ("a".to_string(), struggling()),
        ("b".to_string(), Metrics::new(6.7, 88.0, 3.2, 189, 0.02).unwrap()),
    ];
    let reports: Vec<_> = RiskClassifier::new()
        .analyze_batch(&projects)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(reports[0].project_id, "a");
    assert_eq!(reports[1].project_id, "b");
    assert_eq!(reports[1].level(), RiskLevel::Low);
}
