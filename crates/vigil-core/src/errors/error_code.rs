//! VigilErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable error code string
/// that callers can match on without parsing messages.
pub trait VigilErrorCode {
    /// Returns the error code string (e.g., "INVALID_METRIC").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_METRIC: &str = "INVALID_METRIC";
pub const UNKNOWN_METRIC: &str = "UNKNOWN_METRIC";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const SCORE_REQUIRED: &str = "SCORE_REQUIRED";
