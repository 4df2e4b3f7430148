//! Risk scorers.
//!
//! The score is independent of the status labels: labels never feed back
//! into it. [`RuleBasedScorer`] is the default; [`ExternalScore`] carries a
//! score produced by an outside model.

pub mod external;
pub mod rule_based;

pub use external::ExternalScore;
pub use rule_based::{RuleBasedScorer, ScoreBreakdown};
