use serde::{Deserialize, Serialize};

use crate::models::domain::Member;

/// A batch of members to rank, as read from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBatch {
    pub members: Vec<Member>,
    /// Overrides the configured top-N for this batch
    #[serde(default, rename = "topN", alias = "top_n")]
    pub top_n: Option<usize>,
}
