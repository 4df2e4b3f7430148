//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error". Default: info.
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(constants::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(constants::DEFAULT_LOG_JSON)
    }
}
