use serde::{Deserialize, Serialize};

/// Represents the vote a user is casting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VoteAction {
    /// An upvote or positive endorsement.
    Up,
    /// A downvote or negative endorsement.
    Down,
}

/// Represents a user's current stance on an entity.
///
/// At most one direction exists per (user, entity) pair. The direction lives
/// in client memory only and resets when the authenticated user changes.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteDirection {
    /// The user's latest recorded vote is an upvote.
    Up,
    /// The user's latest recorded vote is a downvote.
    Down,
    /// The user has not voted, or withdrew their vote.
    #[default]
    None,
}

impl From<VoteAction> for VoteDirection {
    fn from(action: VoteAction) -> Self {
        match action {
            VoteAction::Up => VoteDirection::Up,
            VoteAction::Down => VoteDirection::Down,
        }
    }
}
