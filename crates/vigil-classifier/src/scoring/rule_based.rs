//! Additive penalty scorer used when no trained model is available.
//!
//! ```text
//! score = min(100, commit + contributor + resolution + churn + open_issues)
//! ```
//!
//! | Metric                | penalties                              |
//! |-----------------------|----------------------------------------|
//! | commit frequency      | `< 2` +25, `< 4` +15, `< 6` +5         |
//! | contributor activity  | `< 40` +30, `< 60` +20, `< 80` +10     |
//! | issue resolution time | `> 14` +25, `> 10` +15, `> 7` +5       |
//! | code churn            | `> 500` +10, `> 300` +5                |
//! | open issues ratio     | `> 0.4` +10, `> 0.3` +5                |
//!
//! These bands are not the status-label thresholds.

use vigil_core::constants::MAX_RISK_SCORE;
use vigil_core::{Metrics, RiskScorer};

/// Penalty contributed by each metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub commit_frequency: u8,
    pub contributor_activity: u8,
    pub issue_resolution_time: u8,
    pub code_churn: u8,
    pub open_issues_ratio: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedScorer;

impl RuleBasedScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score with every penalty itemised.
    pub fn breakdown(&self, metrics: &Metrics) -> ScoreBreakdown {
        let commit_frequency = commit_penalty(metrics.commit_frequency());
        let contributor_activity = contributor_penalty(metrics.contributor_activity());
        let issue_resolution_time = resolution_penalty(metrics.issue_resolution_time());
        let code_churn = churn_penalty(metrics.code_churn());
        let open_issues_ratio = open_issues_penalty(metrics.open_issues_ratio());

        // Maximum sum is 100; the min keeps that true if a band changes.
        let sum = u16::from(commit_frequency)
            + u16::from(contributor_activity)
            + u16::from(issue_resolution_time)
            + u16::from(code_churn)
            + u16::from(open_issues_ratio);
        let total = sum.min(u16::from(MAX_RISK_SCORE)) as u8;

        ScoreBreakdown {
            commit_frequency,
            contributor_activity,
            issue_resolution_time,
            code_churn,
            open_issues_ratio,
            total,
        }
    }
}

impl RiskScorer for RuleBasedScorer {
    fn score(&self, metrics: &Metrics) -> u8 {
        self.breakdown(metrics).total
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}

fn commit_penalty(per_day: f64) -> u8 {
    if per_day < 2.0 {
        25
    } else if per_day < 4.0 {
        15
    } else if per_day < 6.0 {
        5
    } else {
        0
    }
}

fn contributor_penalty(percent: f64) -> u8 {
    if percent < 40.0 {
        30
    } else if percent < 60.0 {
        20
    } else if percent < 80.0 {
        10
    } else {
        0
    }
}

fn resolution_penalty(days: f64) -> u8 {
    if days > 14.0 {
        25
    } else if days > 10.0 {
        15
    } else if days > 7.0 {
        5
    } else {
        0
    }
}

fn churn_penalty(lines_per_day: u32) -> u8 {
    if lines_per_day > 500 {
        10
    } else if lines_per_day > 300 {
        5
    } else {
        0
    }
}

fn open_issues_penalty(ratio: f64) -> u8 {
    if ratio > 0.4 {
        10
    } else if ratio > 0.3 {
        5
    } else {
        0
    }
}
