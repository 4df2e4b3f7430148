//! Configuration system for Vigil.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod activity_config;
pub mod advisory_config;
pub mod alert_config;
pub mod logging_config;
pub mod scoring_config;
pub mod vigil_config;

pub use activity_config::ActivityConfig;
pub use advisory_config::AdvisoryConfig;
pub use alert_config::AlertConfig;
pub use logging_config::LoggingConfig;
pub use scoring_config::{ScoringConfig, ScoringStrategy};
pub use vigil_config::{ConfigOverrides, VigilConfig};
