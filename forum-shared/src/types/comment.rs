use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::timestamp::parse_timestamp;

/// A comment on a post, as returned by the backend.
///
/// Immutable from the client's perspective except for the vote counts,
/// which may be refreshed from the count endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    /// Raw backend timestamp. Parsed lazily; may be malformed.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
}

impl Comment {
    /// Net score: upvotes minus downvotes. May be negative.
    pub fn net_votes(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// The parsed creation time, or `None` if the backend value is
    /// unparsable.
    pub fn parsed_created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Author display name, falling back to "Anonymous".
    pub fn author(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Payload for submitting a new comment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_votes_can_be_negative() {
        let comment = Comment {
            id: Uuid::new_v4(),
            content: "hm".to_string(),
            author_name: None,
            created_at: "2024-05-01T10:30:00".to_string(),
            upvotes: 0,
            downvotes: 3,
        };
        assert_eq!(comment.net_votes(), -3);
        assert_eq!(comment.author(), "Anonymous");
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "a7ef0016-a2f4-44fb-82ca-a4f5c61d2cf5",
                "content": "Great write-up",
                "authorName": "rafi",
                "createdAt": "2024-05-01T10:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(comment.author(), "rafi");
        assert_eq!(comment.upvotes, 0);
        assert!(comment.parsed_created_at().is_some());
    }
}
