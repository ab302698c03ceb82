use serde::{Deserialize, Serialize};

/// Represents the aggregated vote counts for an entity.
///
/// This is the authoritative aggregate returned by the backend's count
/// endpoints. Counts are unsigned by construction so a displayed count can
/// never be negative.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VotesCount {
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
    #[serde(default)]
    pub total_votes: Option<u64>,
}

impl VotesCount {
    /// Net score: upvotes minus downvotes. May be negative.
    pub fn net(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}
