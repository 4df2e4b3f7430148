//! Tracing setup and span names.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_config};

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYZE: &str = "vigil.analyze";
    pub const ANALYZE_BATCH: &str = "vigil.analyze_batch";
    pub const CONFIG_LOAD: &str = "vigil.config_load";
}
