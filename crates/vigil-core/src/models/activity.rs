use serde::{Deserialize, Serialize};

/// Raw repository counts from which a metric snapshot can be derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryActivity {
    /// Commits observed over the last seven days.
    pub commits_last_week: u32,
    pub contributors: u32,
    pub open_issues: u32,
    pub closed_issues: u32,
}
