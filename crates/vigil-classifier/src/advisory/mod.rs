//! Advisory output: recommendations and feature importance.

pub mod importance;
pub mod recommendations;

pub use importance::{default_importance, importance_with_trends};
pub use recommendations::recommend;
