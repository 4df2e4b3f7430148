use serde::{Deserialize, Serialize};

/// Expected impact of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Medium,
    High,
    Critical,
}

impl Impact {
    /// Impact by position in the ranked list: the first two are critical,
    /// the next two high, everything after medium.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 | 1 => Self::Critical,
            2 | 3 => Self::High,
            _ => Self::Medium,
        }
    }
}

/// An actionable corrective step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub message: String,
    pub impact: Impact,
}
