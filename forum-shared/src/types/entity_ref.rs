use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a votable target: a post or a comment.
///
/// Posts carry numeric ids while comments carry UUIDs, mirroring the backend
/// contract, so the two cannot be confused at the call site.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Post(u64),
    Comment(Uuid),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Post(id) => write!(f, "post {}", id),
            EntityRef::Comment(id) => write!(f, "comment {}", id),
        }
    }
}
