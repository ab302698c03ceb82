use serde::{Deserialize, Serialize};

/// Sort key for a comment listing. Pure UI state, never sent to the backend.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentSort {
    /// Descending by creation time. The default.
    #[default]
    Newest,
    /// Ascending by creation time.
    Oldest,
    /// Descending by net votes (upvotes minus downvotes).
    MostVoted,
}

impl CommentSort {
    /// Parse a user-supplied sort key, case-insensitive.
    ///
    /// Returns `None` for unrecognized input so callers can keep the
    /// current key instead of guessing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "most_voted" | "most-voted" | "votes" => Some(Self::MostVoted),
            _ => None,
        }
    }
}
