//! Integration tests for the client facade.
//!
//! These use the real ForumClient but a mock backend, so every assertion
//! about network traffic (how many mutation calls were issued, whether a
//! call happened at all) is exact.

use std::sync::Arc;
use std::time::Duration;

use forum_api::{MockForumApi, TokenStore};
use forum_session::errors::ClientError;
use forum_session::{ForumClient, Session, VoteOutcome};
use forum_shared::types::{
    AdminDashboard, Comment, CommentSort, EntityRef, ModeratorDashboard, Post, Role, University,
    User, VoteAction, VoteDirection, VotesCount,
};
use uuid::Uuid;

fn user(id: u64, role: Role) -> User {
    User {
        id,
        email: Some(format!("user{}@du.ac.bd", id)),
        full_name: Some(format!("User {}", id)),
        university: Some("University of Dhaka".to_string()),
        role,
    }
}

fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: "body".to_string(),
        author_name: None,
        university: None,
        status: Some("APPROVED".to_string()),
        upvotes: 0,
        downvotes: 0,
        vote_count: 0,
        comment_count: 0,
        created_at: Some("2024-05-01T10:00:00".to_string()),
        updated_at: None,
    }
}

fn comment(created_at: &str, upvotes: u64, downvotes: u64) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        content: "content".to_string(),
        author_name: Some("someone".to_string()),
        created_at: created_at.to_string(),
        upvotes,
        downvotes,
    }
}

fn client(api: &Arc<MockForumApi>) -> ForumClient {
    ForumClient::new(api.clone(), Session::new(TokenStore::new()))
}

#[tokio::test]
async fn test_unauthenticated_vote_is_gated_before_the_network() {
    let api = Arc::new(MockForumApi::new());
    let forum = client(&api);

    let outcome = forum.vote(EntityRef::Post(42), VoteAction::Up).await;

    assert_eq!(outcome, VoteOutcome::AuthRequired);
    assert_eq!(api.total_vote_calls(), 0);
}

#[tokio::test]
async fn test_vote_flow_end_to_end() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    let target = EntityRef::Post(42);
    api.set_vote_message("Voted UPVOTE");
    api.set_vote_counts(
        target,
        VotesCount {
            upvotes: 8,
            downvotes: 2,
            total_votes: Some(10),
        },
    );

    let mut forum = client(&api);
    forum.login("rafi", "secret").await.unwrap();

    let outcome = forum.vote(target, VoteAction::Up).await;
    assert!(matches!(outcome, VoteOutcome::Recorded { .. }));
    assert_eq!(forum.vote_direction(target), VoteDirection::Up);
    assert_eq!(forum.cached_counts(target).unwrap().upvotes, 8);
    assert_eq!(api.vote_call_count(target), 1);
}

#[tokio::test]
async fn test_withdrawn_response_resets_direction_and_refreshes_counts() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    let target = EntityRef::Post(42);
    api.set_vote_message("Vote Withdrawn");
    api.set_vote_counts(
        target,
        VotesCount {
            upvotes: 0,
            downvotes: 0,
            total_votes: Some(0),
        },
    );

    let mut forum = client(&api);
    forum.login("rafi", "secret").await.unwrap();

    let outcome = forum.vote(target, VoteAction::Up).await;
    assert_eq!(
        outcome,
        VoteOutcome::Recorded {
            direction: VoteDirection::None,
            counts: VotesCount {
                upvotes: 0,
                downvotes: 0,
                total_votes: Some(0),
            },
        }
    );
    assert_eq!(forum.vote_direction(target), VoteDirection::None);
}

#[tokio::test]
async fn test_switching_users_resets_remembered_directions() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("alice", "pw-alice", user(1, Role::User));
    api.register_account("bob", "pw-bob", user(2, Role::User));
    let target = EntityRef::Post(7);
    api.set_vote_message("Voted DOWNVOTE");

    let mut forum = client(&api);
    forum.login("alice", "pw-alice").await.unwrap();
    forum.vote(target, VoteAction::Down).await;
    assert_eq!(forum.vote_direction(target), VoteDirection::Down);

    forum.login("bob", "pw-bob").await.unwrap();
    assert_eq!(forum.vote_direction(target), VoteDirection::None);
}

#[tokio::test]
async fn test_logout_resets_remembered_directions() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("alice", "pw", user(1, Role::User));
    let target = EntityRef::Post(7);
    api.set_vote_message("Voted UPVOTE");

    let mut forum = client(&api);
    forum.login("alice", "pw").await.unwrap();
    forum.vote(target, VoteAction::Up).await;

    forum.logout().unwrap();

    assert!(!forum.session().is_authenticated());
    assert_eq!(forum.vote_direction(target), VoteDirection::None);
}

#[tokio::test]
async fn test_concurrent_clicks_issue_a_single_mutation() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    api.set_vote_delay(Duration::from_millis(50));
    let target = EntityRef::Post(42);

    let mut forum = client(&api);
    forum.login("rafi", "secret").await.unwrap();

    let (first, second) = tokio::join!(
        forum.vote(target, VoteAction::Up),
        forum.vote(target, VoteAction::Up),
    );

    assert_eq!(api.vote_call_count(target), 1);
    let outcomes = [first, second];
    assert!(outcomes.iter().any(|o| *o == VoteOutcome::InFlight));
}

#[tokio::test]
async fn test_comments_come_back_ordered() {
    let api = Arc::new(MockForumApi::new());
    let post_id = api.register_post(post(1, "Exam schedule"));
    let older = comment("2024-05-01T10:00:00", 2, 0);
    let newer = comment("2024-05-01T10:00:10", 0, 1);
    api.register_comment(post_id, older.clone());
    api.register_comment(post_id, newer.clone());

    let forum = client(&api);

    let newest = forum.comments(post_id, CommentSort::Newest).await.unwrap();
    assert_eq!(newest[0].id, newer.id);

    let by_votes = forum
        .comments(post_id, CommentSort::MostVoted)
        .await
        .unwrap();
    assert_eq!(by_votes[0].id, older.id);
}

#[tokio::test]
async fn test_comment_submission_is_validated_and_gated() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    let post_id = api.register_post(post(1, "Exam schedule"));

    let mut forum = client(&api);

    // Signed out: gated before validation or network.
    let gated = forum.submit_comment(post_id, "hello").await;
    assert!(matches!(gated, Err(ClientError::AuthRequired)));

    forum.login("rafi", "secret").await.unwrap();

    // Blank content: rejected locally.
    let blank = forum.submit_comment(post_id, "   ").await;
    assert!(matches!(blank, Err(ClientError::Validation(_))));

    let submitted = forum.submit_comment(post_id, "  hello  ").await.unwrap();
    assert_eq!(submitted.content, "hello");

    let listed = forum.comments(post_id, CommentSort::Oldest).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_dashboards_are_role_gated() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("student", "pw", user(1, Role::User));
    api.register_account("admin", "pw", user(2, Role::Admin));
    api.set_admin_dashboard(AdminDashboard {
        total_posts: 12,
        ..AdminDashboard::default()
    });

    let mut forum = client(&api);
    forum.login("student", "pw").await.unwrap();
    assert!(matches!(
        forum.admin_dashboard().await,
        Err(ClientError::RoleRequired { role: Role::Admin })
    ));

    forum.login("admin", "pw").await.unwrap();
    let dashboard = forum.admin_dashboard().await.unwrap();
    assert_eq!(dashboard.total_posts, 12);

    // Admins can reach the moderator surface too.
    assert!(forum.moderator_dashboard().await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_search_is_debounced_latest_wins() {
    let api = Arc::new(MockForumApi::new());
    api.register_post(post(1, "Exam schedule"));
    api.register_post(post(2, "Hostel wifi"));

    let forum = client(&api);

    let (stale, fresh) = tokio::join!(forum.search("ex"), forum.search("exam"));

    assert!(stale.unwrap().is_none());
    let hits = fresh.unwrap().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[tokio::test(start_paused = true)]
async fn test_blank_search_returns_the_unfiltered_list() {
    let api = Arc::new(MockForumApi::new());
    api.register_post(post(1, "Exam schedule"));
    api.register_post(post(2, "Hostel wifi"));

    let forum = client(&api);

    let all = forum.search("   ").await.unwrap().unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_comment_edit_round_trip() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    let post_id = api.register_post(post(1, "Exam schedule"));

    let mut forum = client(&api);
    forum.login("rafi", "secret").await.unwrap();

    let submitted = forum.submit_comment(post_id, "first dratf").await.unwrap();
    let edited = forum
        .update_comment(submitted.id, "first draft")
        .await
        .unwrap();
    assert_eq!(edited.content, "first draft");

    forum.delete_comment(submitted.id).await.unwrap();
    assert!(forum
        .comments(post_id, CommentSort::Newest)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_admin_actions_require_and_use_the_admin_role() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("admin", "pw", user(9, Role::Admin));
    let post_id = api.register_post(post(3, "Spam"));

    let mut forum = client(&api);
    forum.login("admin", "pw").await.unwrap();

    let message = forum.set_post_management(true).await.unwrap();
    assert!(message.contains("enabled"));

    let promotion = forum.promote_user(4, "University of Dhaka").await.unwrap();
    assert!(promotion.contains("promoted"));

    forum.admin_delete_post(post_id).await.unwrap();
    assert!(forum.post(post_id).await.is_err());

    let other_post = api.register_post(post(4, "Another"));
    let stray = comment("2024-05-01T10:00:00", 0, 0);
    api.register_comment(other_post, stray.clone());
    forum.admin_delete_comment(stray.id).await.unwrap();

    api.register_account("gone", "pw", user(33, Role::User));
    forum.admin_delete_user(33).await.unwrap();
}

#[tokio::test]
async fn test_moderator_actions_are_gated_for_plain_users() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("student", "pw", user(1, Role::User));
    api.register_account("moderator", "pw", user(2, Role::Moderator));
    api.set_moderator_dashboard(ModeratorDashboard {
        assigned_university: Some("University of Dhaka".to_string()),
        pending_count: 3,
        ..ModeratorDashboard::default()
    });
    let post_id = api.register_post(post(5, "Pending post"));

    let mut forum = client(&api);
    forum.login("student", "pw").await.unwrap();
    assert!(matches!(
        forum.moderator_dashboard().await,
        Err(ClientError::RoleRequired {
            role: Role::Moderator
        })
    ));
    assert!(forum.ban_user(7).await.is_err());

    forum.login("moderator", "pw").await.unwrap();
    let dashboard = forum.moderator_dashboard().await.unwrap();
    assert_eq!(dashboard.pending_count, 3);

    assert!(forum.ban_user(7).await.unwrap().contains("banned"));
    assert!(forum.unban_user(7).await.unwrap().contains("unbanned"));

    let flagged = comment("2024-05-01T10:00:00", 0, 0);
    api.register_comment(post_id, flagged.clone());
    forum.moderator_delete_comment(flagged.id).await.unwrap();
    forum.moderator_delete_post(post_id).await.unwrap();
}

#[tokio::test]
async fn test_universities_listing_and_lookup() {
    let api = Arc::new(MockForumApi::new());
    api.register_university(University {
        id: 1,
        name: "University of Dhaka".to_string(),
    });
    api.register_university(University {
        id: 2,
        name: "BUET".to_string(),
    });

    let forum = client(&api);

    assert_eq!(forum.universities().await.unwrap().len(), 2);
    assert_eq!(forum.university(2).await.unwrap().name, "BUET");
    assert!(forum.university(99).await.is_err());
}

#[tokio::test]
async fn test_create_post_requires_auth_and_content() {
    let api = Arc::new(MockForumApi::new());
    api.register_account("rafi", "secret", user(1, Role::User));
    let mut forum = client(&api);

    let draft = forum_shared::types::NewPost {
        title: "Midterm dates".to_string(),
        content: "Posted on the notice board".to_string(),
        university: None,
    };

    assert!(matches!(
        forum.create_post(&draft).await,
        Err(ClientError::AuthRequired)
    ));

    forum.login("rafi", "secret").await.unwrap();

    let empty = forum_shared::types::NewPost {
        title: String::new(),
        content: "body".to_string(),
        university: None,
    };
    assert!(matches!(
        forum.create_post(&empty).await,
        Err(ClientError::Validation(_))
    ));

    let created = forum.create_post(&draft).await.unwrap();
    assert_eq!(created.title, "Midterm dates");
    assert!(forum.post(created.id).await.is_ok());
}
