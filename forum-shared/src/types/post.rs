use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timestamp::parse_timestamp;

/// A forum post, as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    /// Moderation status as reported by the backend (e.g. "APPROVED").
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Post {
    /// Net score: upvotes minus downvotes. May be negative.
    pub fn net_votes(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// The parsed creation time, or `None` if missing or unparsable.
    pub fn parsed_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Author display name, falling back to "Anonymous".
    pub fn author(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Payload for creating or updating a post.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}
