//! Scoring configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the overall risk score comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Additive penalty rules over the raw metrics.
    #[default]
    RuleBased,
    /// Score supplied by the caller for every analysis (e.g. from a trained model).
    External,
}

impl ScoringStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuleBased => "rule_based",
            Self::External => "external",
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule_based" | "rule-based" => Ok(Self::RuleBased),
            "external" => Ok(Self::External),
            other => Err(format!("unknown scoring strategy: {other}")),
        }
    }
}

/// Configuration for the scoring subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score source. Default: rule_based.
    pub strategy: Option<ScoringStrategy>,
}

impl ScoringConfig {
    pub fn effective_strategy(&self) -> ScoringStrategy {
        self.strategy.unwrap_or_default()
    }
}
