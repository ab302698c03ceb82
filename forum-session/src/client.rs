//! The client facade.
//!
//! `ForumClient` owns the session, the vote coordinator, and the search
//! debouncer, and exposes the operations the presentation layer calls. It
//! is the single place where auth gating, role gating, and validation run
//! before a request is built.

use std::sync::Arc;

use forum_api::{
    AdminApi, AuthApi, CommentsApi, ForumApi, ModeratorApi, PostsApi, UniversitiesApi,
};
use forum_shared::types::{
    AdminDashboard, Comment, CommentSort, Credentials, EntityRef, ModeratorDashboard, NewComment,
    NewPost, Post, Registration, Role, University, User, VoteAction, VoteDirection, VotesCount,
};
use tracing::info;
use uuid::Uuid;

use crate::compose;
use crate::errors::ClientError;
use crate::ordering::sort_comments;
use crate::search::Debouncer;
use crate::session::Session;
use crate::voting::{VoteCoordinator, VoteOutcome};

pub struct ForumClient {
    api: Arc<dyn ForumApi>,
    session: Session,
    votes: VoteCoordinator,
    search: Debouncer,
}

impl ForumClient {
    pub fn new<A>(api: Arc<A>, session: Session) -> Self
    where
        A: ForumApi + 'static,
    {
        Self {
            votes: VoteCoordinator::new(api.clone()),
            api,
            session,
            search: Debouncer::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ---- auth ----

    /// Log in and establish the session.
    ///
    /// If the login response carries no profile, a follow-up `/auth/me`
    /// fills it in. When the authenticated identity changes, every
    /// remembered vote direction is dropped - the new user inherits none.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Option<User>, ClientError> {
        let response = self
            .api
            .login(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        let changed = self.session.establish(response.token, response.user)?;
        if self.session.current_user().is_none() {
            if let Ok(profile) = self.api.current_user().await {
                self.session.set_user(Some(profile))?;
            }
        }
        if changed {
            self.votes.clear_directions();
        }

        info!(
            user = self
                .session
                .current_user()
                .map(User::display_name)
                .unwrap_or("(unknown)"),
            "signed in"
        );
        Ok(self.session.current_user().cloned())
    }

    /// Sign out, dropping the session and all remembered vote directions.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.clear()?;
        self.votes.clear_directions();
        info!("signed out");
        Ok(())
    }

    /// Validate and submit a registration.
    pub async fn register(&self, registration: &Registration) -> Result<String, ClientError> {
        compose::validate_registration(registration)?;
        Ok(self.api.register(registration).await?)
    }

    // ---- posts ----

    pub async fn posts(&self) -> Result<Vec<Post>, ClientError> {
        Ok(self.api.all_posts().await?)
    }

    pub async fn post(&self, id: u64) -> Result<Post, ClientError> {
        Ok(self.api.post(id).await?)
    }

    pub async fn posts_by_university(&self, university: &str) -> Result<Vec<Post>, ClientError> {
        Ok(self.api.posts_by_university(university).await?)
    }

    /// Debounced search. Resolves to `None` when a newer query superseded
    /// this one; a blank query short-circuits to the unfiltered list
    /// without touching the search endpoint.
    pub async fn search(&self, query: &str) -> Result<Option<Vec<Post>>, ClientError> {
        let Some(query) = self.search.debounce(query).await else {
            return Ok(None);
        };
        if query.trim().is_empty() {
            return Ok(Some(self.api.all_posts().await?));
        }
        Ok(Some(self.api.search_posts(query.trim()).await?))
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError> {
        self.require_auth()?;
        compose::validate_post(&post.title, &post.content)?;
        Ok(self.api.create_post(post).await?)
    }

    pub async fn update_post(&self, id: u64, post: &NewPost) -> Result<Post, ClientError> {
        self.require_auth()?;
        compose::validate_post(&post.title, &post.content)?;
        Ok(self.api.update_post(id, post).await?)
    }

    pub async fn delete_post(&self, id: u64) -> Result<(), ClientError> {
        self.require_auth()?;
        Ok(self.api.delete_post(id).await?)
    }

    // ---- comments ----

    /// Comments on a post, ordered for display.
    pub async fn comments(&self, post_id: u64, sort: CommentSort) -> Result<Vec<Comment>, ClientError> {
        let comments = self.api.comments_for_post(post_id).await?;
        Ok(sort_comments(&comments, sort))
    }

    /// Validate and submit a comment.
    pub async fn submit_comment(&self, post_id: u64, content: &str) -> Result<Comment, ClientError> {
        self.require_auth()?;
        let content = compose::validate_comment(content)?;
        Ok(self.api.add_comment(post_id, &NewComment { content }).await?)
    }

    /// Validate and submit an edit to an existing comment.
    pub async fn update_comment(&self, comment_id: Uuid, content: &str) -> Result<Comment, ClientError> {
        self.require_auth()?;
        let content = compose::validate_comment(content)?;
        Ok(self
            .api
            .update_comment(comment_id, &NewComment { content })
            .await?)
    }

    pub async fn delete_comment(&self, comment_id: Uuid) -> Result<(), ClientError> {
        self.require_auth()?;
        Ok(self.api.delete_comment(comment_id).await?)
    }

    // ---- votes ----

    /// Handle a vote click. Never fails; the outcome carries what happened.
    pub async fn vote(&self, target: EntityRef, action: VoteAction) -> VoteOutcome {
        self.votes
            .vote(self.session.is_authenticated(), target, action)
            .await
    }

    /// The current user's stance on an entity.
    pub fn vote_direction(&self, target: EntityRef) -> VoteDirection {
        self.votes.direction(target)
    }

    /// Last authoritative counts seen for an entity.
    pub fn cached_counts(&self, target: EntityRef) -> Option<VotesCount> {
        self.votes.cached_counts(target)
    }

    /// Refresh counts for an entity outside a vote, e.g. on view load.
    pub async fn refresh_counts(&self, target: EntityRef) -> Option<VotesCount> {
        self.votes.refresh_counts(target).await
    }

    // ---- universities ----

    pub async fn universities(&self) -> Result<Vec<University>, ClientError> {
        Ok(self.api.all_universities().await?)
    }

    pub async fn university(&self, id: u64) -> Result<University, ClientError> {
        Ok(self.api.university(id).await?)
    }

    // ---- dashboards ----

    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.admin_dashboard().await?)
    }

    pub async fn set_post_management(&self, enabled: bool) -> Result<String, ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.set_post_management(enabled).await?)
    }

    pub async fn promote_user(&self, user_id: u64, university: &str) -> Result<String, ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.promote_user(user_id, university).await?)
    }

    pub async fn admin_delete_post(&self, post_id: u64) -> Result<(), ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.admin_delete_post(post_id).await?)
    }

    pub async fn admin_delete_comment(&self, comment_id: Uuid) -> Result<(), ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.admin_delete_comment(comment_id).await?)
    }

    pub async fn admin_delete_user(&self, user_id: u64) -> Result<(), ClientError> {
        self.require_role(Role::Admin)?;
        Ok(self.api.admin_delete_user(user_id).await?)
    }

    pub async fn moderator_dashboard(&self) -> Result<ModeratorDashboard, ClientError> {
        self.require_role(Role::Moderator)?;
        Ok(self.api.moderator_dashboard().await?)
    }

    pub async fn moderator_delete_post(&self, post_id: u64) -> Result<(), ClientError> {
        self.require_role(Role::Moderator)?;
        Ok(self.api.moderator_delete_post(post_id).await?)
    }

    pub async fn moderator_delete_comment(&self, comment_id: Uuid) -> Result<(), ClientError> {
        self.require_role(Role::Moderator)?;
        Ok(self.api.moderator_delete_comment(comment_id).await?)
    }

    pub async fn ban_user(&self, user_id: u64) -> Result<String, ClientError> {
        self.require_role(Role::Moderator)?;
        Ok(self.api.ban_user(user_id).await?)
    }

    pub async fn unban_user(&self, user_id: u64) -> Result<String, ClientError> {
        self.require_role(Role::Moderator)?;
        Ok(self.api.unban_user(user_id).await?)
    }

    fn require_auth(&self) -> Result<(), ClientError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::AuthRequired)
        }
    }

    fn require_role(&self, role: Role) -> Result<(), ClientError> {
        self.require_auth()?;
        let held = self
            .session
            .current_user()
            .map(|user| user.role)
            .unwrap_or_default();
        let allowed = match role {
            Role::Admin => held == Role::Admin,
            // Admins can reach the moderator surface too.
            Role::Moderator => held == Role::Moderator || held == Role::Admin,
            Role::User => true,
        };
        if allowed {
            Ok(())
        } else {
            Err(ClientError::RoleRequired { role })
        }
    }
}
