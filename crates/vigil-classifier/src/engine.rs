use chrono::{DateTime, Utc};
use rayon::prelude::*;
use vigil_core::config::ScoringStrategy;
use vigil_core::models::{Alert, AnalysisReport, FeatureImportance};
use vigil_core::tracing::names;
use vigil_core::{AnalysisError, Metrics, RiskScorer, VigilConfig};

use crate::advisory::{default_importance, importance_with_trends, recommend};
use crate::alerts::raise_alerts;
use crate::assess::assess;
use crate::scoring::{ExternalScore, RuleBasedScorer};
use crate::warnings::{aggregate_warnings, metric_warnings};

/// Produces analysis reports from metric snapshots.
///
/// Holds the resolved config and the scorer it selects. With the external
/// strategy there is no scorer and every score must be supplied by the caller.
pub struct RiskClassifier {
    scorer: Option<Box<dyn RiskScorer>>,
    config: VigilConfig,
}

impl RiskClassifier {
    /// Rule-based scoring with default config.
    pub fn new() -> Self {
        Self::from_config(VigilConfig::default())
    }

    pub fn from_config(config: VigilConfig) -> Self {
        let scorer: Option<Box<dyn RiskScorer>> = match config.scoring.effective_strategy() {
            ScoringStrategy::RuleBased => Some(Box::new(RuleBasedScorer)),
            ScoringStrategy::External => None,
        };
        Self { scorer, config }
    }

    /// Replace the scorer, e.g. with a wrapper around a trained model.
    pub fn with_scorer(mut self, scorer: impl RiskScorer + 'static) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    pub fn scorer_name(&self) -> Option<&str> {
        self.scorer.as_deref().map(|s| s.name())
    }

    /// Analyze a snapshot with the configured scorer.
    pub fn analyze(&self, project_id: &str, metrics: &Metrics) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_at(project_id, metrics, Utc::now())
    }

    /// [`RiskClassifier::analyze`] with an explicit report timestamp.
    pub fn analyze_at(
        &self,
        project_id: &str,
        metrics: &Metrics,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let scorer = self.configured_scorer(project_id)?;
        Ok(self.build_report(project_id, metrics, None, scorer, now))
    }

    /// Analyze with a score produced outside this crate.
    pub fn analyze_with_score(&self, project_id: &str, metrics: &Metrics, score: u8) -> AnalysisReport {
        self.build_report(project_id, metrics, None, &ExternalScore::new(score), Utc::now())
    }

    /// Analyze `current` and fill feature-importance trends from `previous`.
    pub fn analyze_since(
        &self,
        project_id: &str,
        previous: &Metrics,
        current: &Metrics,
    ) -> Result<AnalysisReport, AnalysisError> {
        let scorer = self.configured_scorer(project_id)?;
        Ok(self.build_report(project_id, current, Some(previous), scorer, Utc::now()))
    }

    /// Analyze many projects in parallel. Output order matches input order.
    pub fn analyze_batch(
        &self,
        projects: &[(String, Metrics)],
    ) -> Vec<Result<AnalysisReport, AnalysisError>> {
        self.analyze_batch_at(projects, Utc::now())
    }

    /// [`RiskClassifier::analyze_batch`] with one timestamp for every report.
    pub fn analyze_batch_at(
        &self,
        projects: &[(String, Metrics)],
        now: DateTime<Utc>,
    ) -> Vec<Result<AnalysisReport, AnalysisError>> {
        let _span = tracing::info_span!(names::ANALYZE_BATCH, projects = projects.len()).entered();
        projects
            .par_iter()
            .map(|(project_id, metrics)| self.analyze_at(project_id, metrics, now))
            .collect()
    }

    /// Alerts for a report, stamped with the report's timestamp.
    pub fn alerts_for(&self, report: &AnalysisReport) -> Vec<Alert> {
        raise_alerts(
            &report.project_id,
            &report.assessment,
            &metric_warnings(&report.assessment),
            report.timestamp,
            &self.config.alerts,
        )
    }

    /// Feature importance, with trends when a previous snapshot is known.
    pub fn feature_importance(
        &self,
        previous: Option<&Metrics>,
        current: &Metrics,
    ) -> Vec<FeatureImportance> {
        match previous {
            Some(previous) => importance_with_trends(
                previous,
                current,
                self.config.advisory.effective_trend_tolerance(),
            ),
            None => default_importance(),
        }
    }

    fn configured_scorer(&self, project_id: &str) -> Result<&dyn RiskScorer, AnalysisError> {
        self.scorer
            .as_deref()
            .ok_or_else(|| AnalysisError::ScoreRequired {
                project_id: project_id.to_owned(),
            })
    }

    fn build_report(
        &self,
        project_id: &str,
        metrics: &Metrics,
        previous: Option<&Metrics>,
        scorer: &dyn RiskScorer,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let _span = tracing::info_span!(names::ANALYZE, project_id).entered();

        let score = scorer.score(metrics);
        let assessment = assess(metrics, score);
        tracing::debug!(
            score = assessment.score(),
            level = %assessment.level(),
            scorer = scorer.name(),
            "risk assessed"
        );

        AnalysisReport {
            project_id: project_id.to_owned(),
            timestamp: now,
            warnings: aggregate_warnings(&assessment),
            recommendations: recommend(metrics, self.config.advisory.effective_max_recommendations()),
            feature_importance: self.feature_importance(previous, metrics),
            metrics: *metrics,
            scorer: scorer.name().to_owned(),
            assessment,
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}
