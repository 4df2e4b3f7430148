//! Top-level Vigil configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging_config::LOG_LEVELS;
use super::{
    ActivityConfig, AdvisoryConfig, AlertConfig, LoggingConfig, ScoringConfig, ScoringStrategy,
};
use crate::constants::{MAX_RISK_SCORE, PROJECT_CONFIG_FILENAME, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`VIGIL_*`)
/// 3. Project config (`vigil.toml` in project root)
/// 4. User config (`~/.vigil/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    pub scoring: ScoringConfig,
    pub advisory: AdvisoryConfig,
    pub alerts: AlertConfig,
    pub activity: ActivityConfig,
    pub logging: LoggingConfig,
}

/// Override arguments that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub scoring_strategy: Option<ScoringStrategy>,
    pub max_recommendations: Option<usize>,
    pub critical_above: Option<u8>,
    pub log_level: Option<String>,
}

impl VigilConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `~/.vigil/config.toml`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, Self::user_config_path().as_deref(), overrides)
    }

    /// Same as [`VigilConfig::load`] with an explicit user config path.
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let _span = tracing::debug_span!(crate::tracing::names::CONFIG_LOAD, root = %root.display()).entered();
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (no layering).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VigilConfig) -> Result<(), ConfigError> {
        if let Some(max) = config.advisory.max_recommendations {
            if max == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "advisory.max_recommendations".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.advisory.trend_tolerance {
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(ConfigError::ValidationFailed {
                    field: "advisory.trend_tolerance".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(critical) = config.alerts.critical_above {
            if critical > MAX_RISK_SCORE {
                return Err(ConfigError::ValidationFailed {
                    field: "alerts.critical_above".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if let Some(days) = config.activity.default_resolution_days {
            if !days.is_finite() || days < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "activity.default_resolution_days".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if let Some(ref level) = config.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!("must be one of {}", LOG_LEVELS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.vigil/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut VigilConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: VigilConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut VigilConfig, other: &VigilConfig) {
        // Scoring
        if other.scoring.strategy.is_some() {
            base.scoring.strategy = other.scoring.strategy;
        }

        // Advisory
        if other.advisory.max_recommendations.is_some() {
            base.advisory.max_recommendations = other.advisory.max_recommendations;
        }
        if other.advisory.trend_tolerance.is_some() {
            base.advisory.trend_tolerance = other.advisory.trend_tolerance;
        }

        // Alerts
        if other.alerts.max_per_analysis.is_some() {
            base.alerts.max_per_analysis = other.alerts.max_per_analysis;
        }
        if other.alerts.critical_above.is_some() {
            base.alerts.critical_above = other.alerts.critical_above;
        }

        // Activity
        if other.activity.default_resolution_days.is_some() {
            base.activity.default_resolution_days = other.activity.default_resolution_days;
        }
        if other.activity.default_code_churn.is_some() {
            base.activity.default_code_churn = other.activity.default_code_churn;
        }

        // Logging
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VIGIL_SCORING_STRATEGY`, `VIGIL_ALERTS_CRITICAL_ABOVE`, etc.
    /// Unparseable values are skipped.
    fn apply_env_overrides(config: &mut VigilConfig) {
        if let Ok(val) = std::env::var("VIGIL_SCORING_STRATEGY") {
            if let Ok(v) = val.parse::<ScoringStrategy>() {
                config.scoring.strategy = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VIGIL_ADVISORY_MAX_RECOMMENDATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.advisory.max_recommendations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VIGIL_ADVISORY_TREND_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.advisory.trend_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VIGIL_ALERTS_MAX_PER_ANALYSIS") {
            if let Ok(v) = val.parse::<usize>() {
                config.alerts.max_per_analysis = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VIGIL_ALERTS_CRITICAL_ABOVE") {
            if let Ok(v) = val.parse::<u8>() {
                config.alerts.critical_above = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VIGIL_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
        if let Ok(val) = std::env::var("VIGIL_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.json = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut VigilConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.scoring_strategy {
            config.scoring.strategy = Some(v);
        }
        if let Some(v) = overrides.max_recommendations {
            config.advisory.max_recommendations = Some(v);
        }
        if let Some(v) = overrides.critical_above {
            config.alerts.critical_above = Some(v);
        }
        if let Some(ref v) = overrides.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
