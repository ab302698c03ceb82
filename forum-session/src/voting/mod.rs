//! Vote reconciliation.
//!
//! Translates a vote click into an authorization check, a backend mutation,
//! and a refresh of the locally cached counts from the authoritative count
//! endpoint. Optimistic arithmetic is never trusted for display.
//!
//! Per entity the coordinator is a two-state machine: `Idle` and `Voting`.
//! A click moves the entity to `Voting`, the backend response (success or
//! failure) moves it back, and clicks that arrive while `Voting` are
//! dropped. Votes on distinct entities overlap freely with no ordering
//! guarantee between them.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use forum_api::{ApiError, VotesApi};
use forum_shared::types::{EntityRef, VoteAction, VoteDirection, VotesCount};
use tracing::warn;

/// Result of a vote click, as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum VoteOutcome {
    /// The user is not signed in; nothing was sent. Prompt for login.
    AuthRequired,
    /// A vote for this entity is already in flight; the click was dropped.
    InFlight,
    /// The backend recorded the action. `direction` is the user's stance as
    /// inferred from the response message; `counts` is the fresh aggregate.
    Recorded {
        direction: VoteDirection,
        counts: VotesCount,
    },
    /// The call failed. Logged; prior state left untouched (silent-fail
    /// policy - no user-facing message).
    Failed,
}

/// Client-side vote state for the current user.
///
/// Holds the per-entity direction cache, the per-entity count cache, and
/// the in-flight set that serializes votes per entity.
pub struct VoteCoordinator {
    votes_api: Arc<dyn VotesApi>,
    in_flight: Mutex<HashSet<EntityRef>>,
    directions: Mutex<HashMap<EntityRef, VoteDirection>>,
    counts: Mutex<HashMap<EntityRef, VotesCount>>,
}

impl VoteCoordinator {
    pub fn new<V>(votes_api: Arc<V>) -> Self
    where
        V: VotesApi + 'static,
    {
        Self {
            votes_api,
            in_flight: Mutex::new(HashSet::new()),
            directions: Mutex::new(HashMap::new()),
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Handle a vote click on `target`.
    ///
    /// Unauthenticated clicks and clicks on an entity that already has a
    /// vote in flight return without touching the network. Otherwise issues
    /// exactly one mutation call, infers the resulting direction from the
    /// response message, and replaces the cached counts with the aggregate
    /// from the count endpoint.
    ///
    /// Errors are logged and swallowed: the prior direction and counts stay
    /// as they were and the outcome is [`VoteOutcome::Failed`].
    pub async fn vote(
        &self,
        authenticated: bool,
        target: EntityRef,
        action: VoteAction,
    ) -> VoteOutcome {
        if !authenticated {
            return VoteOutcome::AuthRequired;
        }

        let Some(_guard) = self.begin(target) else {
            return VoteOutcome::InFlight;
        };

        match self.cast_and_refresh(target, action).await {
            Ok((direction, counts)) => {
                self.directions.lock().unwrap().insert(target, direction);
                self.counts.lock().unwrap().insert(target, counts);
                VoteOutcome::Recorded { direction, counts }
            }
            Err(error) => {
                warn!(entity = %target, %error, "vote failed, keeping last known state");
                VoteOutcome::Failed
            }
        }
    }

    /// The current user's stance on an entity, `None` if never voted or
    /// withdrawn.
    pub fn direction(&self, target: EntityRef) -> VoteDirection {
        self.directions
            .lock()
            .unwrap()
            .get(&target)
            .copied()
            .unwrap_or_default()
    }

    /// The last authoritative counts seen for an entity, if any.
    pub fn cached_counts(&self, target: EntityRef) -> Option<VotesCount> {
        self.counts.lock().unwrap().get(&target).copied()
    }

    /// Forget every remembered direction. Called when the authenticated
    /// user changes; a different user inherits no vote state.
    pub fn clear_directions(&self) {
        self.directions.lock().unwrap().clear();
    }

    /// Refresh the cached counts for an entity outside a vote, e.g. when a
    /// view loads. Errors are logged and leave the cache untouched.
    pub async fn refresh_counts(&self, target: EntityRef) -> Option<VotesCount> {
        match self.fetch_counts(target).await {
            Ok(counts) => {
                self.counts.lock().unwrap().insert(target, counts);
                Some(counts)
            }
            Err(error) => {
                warn!(entity = %target, %error, "count refresh failed");
                None
            }
        }
    }

    fn begin(&self, target: EntityRef) -> Option<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(target) {
            return None;
        }
        Some(InFlightGuard {
            coordinator: self,
            target,
        })
    }

    async fn cast_and_refresh(
        &self,
        target: EntityRef,
        action: VoteAction,
    ) -> Result<(VoteDirection, VotesCount), ApiError> {
        let message = match (target, action) {
            (EntityRef::Post(id), VoteAction::Up) => self.votes_api.upvote_post(id).await?,
            (EntityRef::Post(id), VoteAction::Down) => self.votes_api.downvote_post(id).await?,
            (EntityRef::Comment(id), VoteAction::Up) => self.votes_api.upvote_comment(id).await?,
            (EntityRef::Comment(id), VoteAction::Down) => {
                self.votes_api.downvote_comment(id).await?
            }
        };

        let direction = infer_direction(&message);
        let counts = self.fetch_counts(target).await?;
        Ok((direction, counts))
    }

    async fn fetch_counts(&self, target: EntityRef) -> Result<VotesCount, ApiError> {
        match target {
            EntityRef::Post(id) => self.votes_api.post_vote_counts(id).await,
            EntityRef::Comment(id) => self.votes_api.comment_vote_counts(id).await,
        }
    }
}

/// Releases the in-flight marker on every exit path, error paths included.
struct InFlightGuard<'a> {
    coordinator: &'a VoteCoordinator,
    target: EntityRef,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.coordinator
            .in_flight
            .lock()
            .unwrap()
            .remove(&self.target);
    }
}

/// Infer the user's resulting stance from the backend's free-text message.
///
/// The vote endpoints answer "Voted UPVOTE", "Vote changed to DOWNVOTE", or
/// "Vote Withdrawn" - there is no structured field, so substring matching
/// is the contract. "withdrawn" wins over everything; a message matching
/// nothing yields `None` (drop the cached stance rather than guess).
fn infer_direction(message: &str) -> VoteDirection {
    let normalized = message.to_ascii_lowercase();
    if normalized.contains("withdrawn") {
        VoteDirection::None
    } else if normalized.contains("upvote") {
        VoteDirection::Up
    } else if normalized.contains("downvote") {
        VoteDirection::Down
    } else {
        VoteDirection::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_api::MockForumApi;
    use std::time::Duration;
    use uuid::Uuid;

    fn coordinator(api: &Arc<MockForumApi>) -> VoteCoordinator {
        VoteCoordinator::new(api.clone())
    }

    #[test]
    fn test_infer_direction_from_backend_messages() {
        assert_eq!(infer_direction("Voted UPVOTE"), VoteDirection::Up);
        assert_eq!(infer_direction("Voted DOWNVOTE"), VoteDirection::Down);
        assert_eq!(infer_direction("Vote changed to UPVOTE"), VoteDirection::Up);
        assert_eq!(
            infer_direction("Vote changed to DOWNVOTE"),
            VoteDirection::Down
        );
        assert_eq!(infer_direction("Vote Withdrawn"), VoteDirection::None);
    }

    #[test]
    fn test_infer_direction_is_case_insensitive() {
        assert_eq!(infer_direction("voted upvote"), VoteDirection::Up);
        assert_eq!(infer_direction("VOTE WITHDRAWN"), VoteDirection::None);
    }

    #[test]
    fn test_infer_direction_unrecognized_message() {
        assert_eq!(infer_direction("OK"), VoteDirection::None);
        assert_eq!(infer_direction(""), VoteDirection::None);
    }

    #[tokio::test]
    async fn test_unauthenticated_vote_never_reaches_backend() {
        let api = Arc::new(MockForumApi::new());
        let votes = coordinator(&api);

        let outcome = votes
            .vote(false, EntityRef::Post(42), VoteAction::Up)
            .await;

        assert_eq!(outcome, VoteOutcome::AuthRequired);
        assert_eq!(api.total_vote_calls(), 0);
    }

    #[tokio::test]
    async fn test_vote_records_direction_and_refreshes_counts() {
        let api = Arc::new(MockForumApi::new());
        let target = EntityRef::Post(42);
        api.set_vote_message("Voted UPVOTE");
        api.set_vote_counts(
            target,
            VotesCount {
                upvotes: 5,
                downvotes: 1,
                total_votes: Some(6),
            },
        );
        let votes = coordinator(&api);

        let outcome = votes.vote(true, target, VoteAction::Up).await;

        assert_eq!(
            outcome,
            VoteOutcome::Recorded {
                direction: VoteDirection::Up,
                counts: VotesCount {
                    upvotes: 5,
                    downvotes: 1,
                    total_votes: Some(6),
                },
            }
        );
        assert_eq!(votes.direction(target), VoteDirection::Up);
        assert_eq!(votes.cached_counts(target).unwrap().upvotes, 5);
        assert_eq!(api.vote_call_count(target), 1);
    }

    #[tokio::test]
    async fn test_withdrawn_message_resets_direction() {
        let api = Arc::new(MockForumApi::new());
        let target = EntityRef::Post(42);
        let votes = coordinator(&api);

        api.set_vote_message("Voted UPVOTE");
        votes.vote(true, target, VoteAction::Up).await;
        assert_eq!(votes.direction(target), VoteDirection::Up);

        api.set_vote_message("Vote Withdrawn");
        let outcome = votes.vote(true, target, VoteAction::Up).await;

        assert!(matches!(
            outcome,
            VoteOutcome::Recorded {
                direction: VoteDirection::None,
                ..
            }
        ));
        assert_eq!(votes.direction(target), VoteDirection::None);
        // Both clicks reached the backend; the count endpoint was consulted
        // after each one.
        assert_eq!(api.vote_call_count(target), 2);
    }

    #[tokio::test]
    async fn test_concurrent_votes_on_one_entity_issue_one_call() {
        let api = Arc::new(MockForumApi::new());
        api.set_vote_delay(Duration::from_millis(50));
        let target = EntityRef::Post(42);
        let votes = coordinator(&api);

        let (first, second) = tokio::join!(
            votes.vote(true, target, VoteAction::Up),
            votes.vote(true, target, VoteAction::Up),
        );

        assert_eq!(api.vote_call_count(target), 1);
        let outcomes = [first, second];
        assert!(outcomes.iter().any(|o| *o == VoteOutcome::InFlight));
        assert!(outcomes
            .iter()
            .any(|o| matches!(o, VoteOutcome::Recorded { .. })));
    }

    #[tokio::test]
    async fn test_votes_on_distinct_entities_may_overlap() {
        let api = Arc::new(MockForumApi::new());
        api.set_vote_delay(Duration::from_millis(10));
        let votes = coordinator(&api);
        let post = EntityRef::Post(1);
        let comment = EntityRef::Comment(Uuid::new_v4());

        let (first, second) = tokio::join!(
            votes.vote(true, post, VoteAction::Up),
            votes.vote(true, comment, VoteAction::Down),
        );

        assert!(matches!(first, VoteOutcome::Recorded { .. }));
        assert!(matches!(second, VoteOutcome::Recorded { .. }));
        assert_eq!(api.vote_call_count(post), 1);
        assert_eq!(api.vote_call_count(comment), 1);
    }

    #[tokio::test]
    async fn test_failed_vote_leaves_prior_state() {
        let api = Arc::new(MockForumApi::new());
        let target = EntityRef::Post(42);
        api.set_vote_counts(
            target,
            VotesCount {
                upvotes: 3,
                downvotes: 0,
                total_votes: Some(3),
            },
        );
        let votes = coordinator(&api);

        api.set_vote_message("Voted UPVOTE");
        votes.vote(true, target, VoteAction::Up).await;

        api.set_vote_failure(true);
        let outcome = votes.vote(true, target, VoteAction::Down).await;

        assert_eq!(outcome, VoteOutcome::Failed);
        // Direction and counts are whatever the last successful vote left.
        assert_eq!(votes.direction(target), VoteDirection::Up);
        assert_eq!(votes.cached_counts(target).unwrap().upvotes, 3);
    }

    #[tokio::test]
    async fn test_failed_vote_releases_the_in_flight_marker() {
        let api = Arc::new(MockForumApi::new());
        let target = EntityRef::Post(42);
        let votes = coordinator(&api);

        api.set_vote_failure(true);
        assert_eq!(
            votes.vote(true, target, VoteAction::Up).await,
            VoteOutcome::Failed
        );

        api.set_vote_failure(false);
        api.set_vote_message("Voted UPVOTE");
        let retry = votes.vote(true, target, VoteAction::Up).await;
        assert!(matches!(retry, VoteOutcome::Recorded { .. }));
    }

    #[tokio::test]
    async fn test_clear_directions_resets_every_entity() {
        let api = Arc::new(MockForumApi::new());
        let votes = coordinator(&api);
        api.set_vote_message("Voted DOWNVOTE");

        votes.vote(true, EntityRef::Post(1), VoteAction::Down).await;
        votes.vote(true, EntityRef::Post(2), VoteAction::Down).await;
        assert_eq!(votes.direction(EntityRef::Post(1)), VoteDirection::Down);

        votes.clear_directions();

        assert_eq!(votes.direction(EntityRef::Post(1)), VoteDirection::None);
        assert_eq!(votes.direction(EntityRef::Post(2)), VoteDirection::None);
    }

    #[tokio::test]
    async fn test_refresh_counts_updates_cache() {
        let api = Arc::new(MockForumApi::new());
        let target = EntityRef::Post(7);
        api.set_vote_counts(
            target,
            VotesCount {
                upvotes: 9,
                downvotes: 2,
                total_votes: Some(11),
            },
        );
        let votes = coordinator(&api);

        let counts = votes.refresh_counts(target).await.unwrap();
        assert_eq!(counts.upvotes, 9);
        assert_eq!(votes.cached_counts(target).unwrap().downvotes, 2);
    }
}
