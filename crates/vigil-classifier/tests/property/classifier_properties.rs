use chrono::Utc;
use proptest::prelude::*;
use vigil_classifier::advisory::recommend;
use vigil_classifier::warnings::metric_warnings;
use vigil_classifier::{
    aggregate_warnings, assess, classify_score, raise_alerts, RiskClassifier, RuleBasedScorer,
    HIGH_RISK_BANNER,
};
use vigil_core::config::AlertConfig;
use vigil_core::{Metrics, RiskLevel, RiskScorer};

fn arb_metrics() -> impl Strategy<Value = Metrics> {
    (
        0.0f64..20.0,
        0.0f64..=100.0,
        0.0f64..60.0,
        0u32..2000,
        0.0f64..=1.0,
    )
        .prop_map(|(c, a, r, ch, o)| Metrics::new(c, a, r, ch, o).unwrap())
}

// ── Score bands ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn level_follows_bands(score in any::<i64>()) {
        let expected = if score < 30 {
            RiskLevel::Low
        } else if score < 60 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        prop_assert_eq!(classify_score(score), expected);
    }
}

// ── Rule-based score bounded and monotone ───────────────────────────────

proptest! {
    #[test]
    fn rule_score_bounded(metrics in arb_metrics()) {
        prop_assert!(RuleBasedScorer.score(&metrics) <= 100);
    }

    #[test]
    fn worsening_one_metric_never_lowers_score(
        metrics in arb_metrics(),
        step in 0.0f64..10.0,
        churn_step in 0u32..500,
    ) {
        let base = RuleBasedScorer.score(&metrics);
        let worse = [
            Metrics::new(
                (metrics.commit_frequency() - step).max(0.0),
                metrics.contributor_activity(),
                metrics.issue_resolution_time(),
                metrics.code_churn(),
                metrics.open_issues_ratio(),
            ),
            Metrics::new(
                metrics.commit_frequency(),
                (metrics.contributor_activity() - step * 10.0).max(0.0),
                metrics.issue_resolution_time(),
                metrics.code_churn(),
                metrics.open_issues_ratio(),
            ),
            Metrics::new(
                metrics.commit_frequency(),
                metrics.contributor_activity(),
                metrics.issue_resolution_time() + step,
                metrics.code_churn(),
                metrics.open_issues_ratio(),
            ),
            Metrics::new(
                metrics.commit_frequency(),
                metrics.contributor_activity(),
                metrics.issue_resolution_time(),
                metrics.code_churn() + churn_step,
                metrics.open_issues_ratio(),
            ),
            Metrics::new(
                metrics.commit_frequency(),
                metrics.contributor_activity(),
                metrics.issue_resolution_time(),
                metrics.code_churn(),
                (metrics.open_issues_ratio() + step / 10.0).min(1.0),
            ),
        ];
        for w in worse {
            let w = w.unwrap();
            prop_assert!(RuleBasedScorer.score(&w) >= base, "{:?} scored below {:?}", w, metrics);
        }
    }
}

// ── Assessment consistency ──────────────────────────────────────────────

proptest! {
    #[test]
    fn assessment_is_consistent(metrics in arb_metrics(), score in 0u8..=255) {
        let a = assess(&metrics, score);
        prop_assert!(a.score() <= 100);
        prop_assert_eq!(a.level(), classify_score(i64::from(a.score())));
        prop_assert_eq!(a.status_labels().len(), 5);
        let again = assess(&metrics, score);
        prop_assert_eq!(&a, &again);
        // Labels never depend on the score.
        let zero = assess(&metrics, 0);
        prop_assert_eq!(a.status_labels(), zero.status_labels());
    }

    #[test]
    fn warnings_match_labels(metrics in arb_metrics(), score in 0u8..=100) {
        let a = assess(&metrics, score);
        let warnings = aggregate_warnings(&a);
        let unhealthy = a.status_labels().iter().filter(|l| !l.status.is_healthiest()).count();
        let banner = usize::from(a.is_high());
        prop_assert_eq!(warnings.len(), unhealthy + banner);
        prop_assert_eq!(warnings.first().map(String::as_str) == Some(HIGH_RISK_BANNER), a.is_high());
    }
}

// ── Advisory bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn recommendations_bounded(metrics in arb_metrics(), max in 0usize..12) {
        let recs = recommend(&metrics, max);
        prop_assert!(recs.len() <= max);
        if max >= 2 {
            prop_assert!(recs.len() >= 2);
        }
    }

    #[test]
    fn alerts_only_when_high(metrics in arb_metrics(), score in 0u8..=100) {
        let a = assess(&metrics, score);
        let alerts = raise_alerts("p", &a, &metric_warnings(&a), Utc::now(), &AlertConfig::default());
        if !a.is_high() {
            prop_assert!(alerts.is_empty());
        }
        prop_assert!(alerts.len() <= 2);
    }
}

// ── Batch equals sequential ─────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn batch_matches_sequential(all in prop::collection::vec(arb_metrics(), 0..20)) {
        let classifier = RiskClassifier::new();
        let now = Utc::now();
        let projects: Vec<(String, Metrics)> = all
            .into_iter()
            .enumerate()
            .map(|(i, m)| (format!("p-{i}"), m))
            .collect();
        let batch = classifier.analyze_batch_at(&projects, now);
        prop_assert_eq!(batch.len(), projects.len());
        for ((id, metrics), result) in projects.iter().zip(batch) {
            let sequential = classifier.analyze_at(id, metrics, now).unwrap();
            prop_assert_eq!(result.unwrap(), sequential);
        }
    }
}
