// Single source of truth for fixed thresholds and defaults.

// --- Risk bands ---
/// Scores below this are `low`.
pub const MEDIUM_RISK_FLOOR: i32 = 30;
/// Scores at or above this are `high`.
pub const HIGH_RISK_FLOOR: i32 = 60;
pub const MAX_RISK_SCORE: u8 = 100;

// --- Status thresholds ---
pub const COMMIT_FREQUENCY_HEALTHY_MIN: f64 = 3.0;
pub const CONTRIBUTOR_ACTIVITY_LOW_BELOW: f64 = 50.0;
pub const CONTRIBUTOR_ACTIVITY_HIGH_MIN: f64 = 70.0;
pub const RESOLUTION_TIME_ELEVATED_ABOVE: f64 = 7.0;
pub const RESOLUTION_TIME_DELAYED_ABOVE: f64 = 10.0;
pub const CODE_CHURN_MODERATE_ABOVE: f64 = 250.0;
pub const CODE_CHURN_HIGH_ABOVE: f64 = 400.0;
pub const OPEN_ISSUES_MODERATE_ABOVE: f64 = 0.20;
pub const OPEN_ISSUES_HIGH_ABOVE: f64 = 0.30;

// --- Metric ranges ---
pub const CONTRIBUTOR_ACTIVITY_MAX: f64 = 100.0;
pub const OPEN_ISSUES_RATIO_MAX: f64 = 1.0;

// --- Advisory ---
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;
pub const DEFAULT_TREND_TOLERANCE: f64 = 0.05;

// --- Alerts ---
pub const DEFAULT_MAX_ALERTS_PER_ANALYSIS: usize = 2;
pub const DEFAULT_CRITICAL_ALERT_ABOVE: u8 = 80;

// --- Repository activity ---
pub const ACTIVITY_WINDOW_DAYS: f64 = 7.0;
pub const MAX_DERIVED_COMMIT_FREQUENCY: f64 = 10.0;
/// Contributor count that maps to 100% activity.
pub const FULL_ACTIVITY_CONTRIBUTORS: f64 = 5.0;
pub const DEFAULT_RESOLUTION_DAYS: f64 = 7.0;
pub const DEFAULT_CODE_CHURN: u32 = 200;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const LOG_ENV_VAR: &str = "VIGIL_LOG";

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "vigil.toml";
pub const USER_CONFIG_DIR: &str = ".vigil";
