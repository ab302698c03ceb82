//! Comment ordering.
//!
//! Produces a total order over a comment list for display without mutating
//! the input. The sort is stable, so comments with equal keys keep their
//! backend order.

use chrono::{DateTime, Utc};
use forum_shared::types::{Comment, CommentSort};

/// Order `comments` for display under the given sort key.
///
/// Returns a fresh vector every call; the input slice is untouched, so
/// switching keys back and forth over the same data is idempotent.
/// Unparsable `created_at` values compare as the epoch, i.e. oldest, and
/// never panic.
pub fn sort_comments(comments: &[Comment], sort: CommentSort) -> Vec<Comment> {
    let mut ordered = comments.to_vec();
    match sort {
        CommentSort::Newest => ordered.sort_by(|a, b| created_key(b).cmp(&created_key(a))),
        CommentSort::Oldest => ordered.sort_by(|a, b| created_key(a).cmp(&created_key(b))),
        CommentSort::MostVoted => ordered.sort_by(|a, b| b.net_votes().cmp(&a.net_votes())),
    }
    ordered
}

fn created_key(comment: &Comment) -> DateTime<Utc> {
    comment.parsed_created_at().unwrap_or(DateTime::UNIX_EPOCH)
}
