use serde::{Deserialize, Serialize};

/// Per-user totals aggregated by the backend (`/api/user/profile`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub photos: u64,
    #[serde(default)]
    pub videos: u64,
    #[serde(default)]
    pub documents: u64,
}
