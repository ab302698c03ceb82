//! Plain-text rendering of forum entities for the shell.

use forum_shared::types::{
    display_timestamp, AdminDashboard, Comment, ModeratorDashboard, Post, University, User,
    VoteDirection, VotesCount,
};

/// Sentiment badge for a net score, mirroring the web client's badge.
pub fn sentiment(net: i64) -> &'static str {
    if net > 0 {
        "Positive"
    } else if net < 0 {
        "Negative"
    } else {
        "Neutral"
    }
}

/// One-line post summary for list views.
pub fn post_summary(post: &Post) -> String {
    format!(
        "#{:<4} [{}] {} - {}{} (▲{} ▼{}, {} comments)",
        post.id,
        sentiment(post.net_votes()),
        post.title,
        post.author(),
        post.university
            .as_deref()
            .map(|u| format!(" @ {}", u))
            .unwrap_or_default(),
        post.upvotes,
        post.downvotes,
        post.comment_count,
    )
}

/// Full post view.
pub fn post_detail(post: &Post) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", post.id, post.title));
    out.push_str(&format!(
        "by {} · {}\n",
        post.author(),
        post.created_at
            .as_deref()
            .map(display_timestamp)
            .unwrap_or_else(|| "Unknown time".to_string()),
    ));
    if let Some(status) = &post.status {
        out.push_str(&format!("status: {}\n", status));
    }
    out.push('\n');
    out.push_str(&post.content);
    out.push_str(&format!("\n\n▲{} ▼{}", post.upvotes, post.downvotes));
    out
}

/// One comment in a listing.
pub fn comment_line(comment: &Comment) -> String {
    format!(
        "[{}] {} · {}\n    {}  (▲{} ▼{}, {})",
        comment.id,
        comment.author(),
        display_timestamp(&comment.created_at),
        comment.content,
        comment.upvotes,
        comment.downvotes,
        sentiment(comment.net_votes()),
    )
}

/// Result line after a recorded vote.
pub fn vote_line(direction: VoteDirection, counts: &VotesCount) -> String {
    let stance = match direction {
        VoteDirection::Up => "your vote: up",
        VoteDirection::Down => "your vote: down",
        VoteDirection::None => "vote withdrawn",
    };
    format!("▲{} ▼{} ({})", counts.upvotes, counts.downvotes, stance)
}

pub fn user_line(user: &User) -> String {
    format!(
        "{} <{}> - {:?}{}",
        user.display_name(),
        user.email.as_deref().unwrap_or("no email"),
        user.role,
        user.university
            .as_deref()
            .map(|u| format!(" @ {}", u))
            .unwrap_or_default(),
    )
}

pub fn university_line(university: &University) -> String {
    format!("#{:<4} {}", university.id, university.name)
}

pub fn admin_dashboard(dashboard: &AdminDashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "posts: {} · users: {} · comments: {} · moderators: {}\n",
        dashboard.total_posts,
        dashboard.total_users,
        dashboard.total_comments,
        dashboard.total_moderators,
    ));
    out.push_str(&format!(
        "post management: {}\n",
        if dashboard.post_management_enabled {
            "enabled"
        } else {
            "disabled"
        }
    ));
    if !dashboard.post_counts_by_university.is_empty() {
        out.push_str("posts by university:\n");
        let mut entries: Vec<_> = dashboard.post_counts_by_university.iter().collect();
        entries.sort();
        for (university, count) in entries {
            out.push_str(&format!("  {}: {}\n", university, count));
        }
    }
    if !dashboard.top_voted_posts.is_empty() {
        out.push_str("top voted posts:\n");
        for post in &dashboard.top_voted_posts {
            out.push_str(&format!("  {}\n", post_summary(post)));
        }
    }
    out.trim_end().to_string()
}

pub fn moderator_dashboard(dashboard: &ModeratorDashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "university: {} · pending: {} · approved: {} · rejected: {}\n",
        dashboard.assigned_university.as_deref().unwrap_or("(none)"),
        dashboard.pending_count,
        dashboard.approved_count,
        dashboard.rejected_count,
    ));
    if !dashboard.pending_posts.is_empty() {
        out.push_str("pending posts:\n");
        for post in &dashboard.pending_posts {
            out.push_str(&format!("  {}\n", post_summary(post)));
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(sentiment(3), "Positive");
        assert_eq!(sentiment(-1), "Negative");
        assert_eq!(sentiment(0), "Neutral");
    }

    #[test]
    fn test_post_summary_contains_badge_and_counts() {
        let post: Post = serde_json::from_str(
            r#"{"id": 5, "title": "Exam schedule", "upvotes": 4, "downvotes": 1}"#,
        )
        .unwrap();
        let line = post_summary(&post);
        assert!(line.contains("[Positive]"));
        assert!(line.contains("Exam schedule"));
        assert!(line.contains("▲4 ▼1"));
    }

    #[test]
    fn test_vote_line_reports_withdrawal() {
        let counts = VotesCount {
            upvotes: 2,
            downvotes: 2,
            total_votes: Some(4),
        };
        assert_eq!(
            vote_line(VoteDirection::None, &counts),
            "▲2 ▼2 (vote withdrawn)"
        );
    }
}
