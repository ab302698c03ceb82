//! Mock forum backend for testing and local development.
//!
//! The `MockForumApi` can be pre-populated with posts, comments, accounts,
//! and vote aggregates, allowing tests to run without network access. It
//! counts vote mutation calls per entity so tests can assert how many calls
//! actually reached the "backend" (single-flight and auth-gating checks),
//! and can inject latency or failures into the vote endpoints.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use forum_shared::types::{
    AdminDashboard, Comment, Credentials, EntityRef, LoginResponse, ModeratorDashboard,
    NewComment, NewPost, Post, Registration, University, User, VotesCount,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::interfaces::{
    AdminApi, AuthApi, CommentsApi, ModeratorApi, PostsApi, UniversitiesApi, VotesApi,
};

struct MockAccount {
    password: String,
    user: User,
}

/// In-memory implementation of the full forum API surface.
pub struct MockForumApi {
    posts: RwLock<HashMap<u64, Post>>,
    comments: RwLock<HashMap<u64, Vec<Comment>>>,
    universities: RwLock<Vec<University>>,
    accounts: RwLock<HashMap<String, MockAccount>>,
    current_user: RwLock<Option<User>>,
    vote_message: RwLock<String>,
    vote_counts: RwLock<HashMap<EntityRef, VotesCount>>,
    vote_calls: RwLock<HashMap<EntityRef, u64>>,
    vote_delay: RwLock<Option<Duration>>,
    vote_failure: RwLock<bool>,
    admin_dashboard: RwLock<AdminDashboard>,
    moderator_dashboard: RwLock<ModeratorDashboard>,
    next_post_id: AtomicU64,
}

impl MockForumApi {
    /// Create an empty mock backend.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
            universities: RwLock::new(Vec::new()),
            accounts: RwLock::new(HashMap::new()),
            current_user: RwLock::new(None),
            vote_message: RwLock::new("Voted UPVOTE".to_string()),
            vote_counts: RwLock::new(HashMap::new()),
            vote_calls: RwLock::new(HashMap::new()),
            vote_delay: RwLock::new(None),
            vote_failure: RwLock::new(false),
            admin_dashboard: RwLock::new(AdminDashboard::default()),
            moderator_dashboard: RwLock::new(ModeratorDashboard::default()),
            next_post_id: AtomicU64::new(1),
        }
    }

    /// Store a post, returning its id.
    pub fn register_post(&self, post: Post) -> u64 {
        let id = post.id;
        self.next_post_id
            .fetch_max(id + 1, Ordering::SeqCst);
        self.posts.write().unwrap().insert(id, post);
        id
    }

    /// Store a comment under a post.
    pub fn register_comment(&self, post_id: u64, comment: Comment) {
        self.comments
            .write()
            .unwrap()
            .entry(post_id)
            .or_default()
            .push(comment);
    }

    /// Store a login account.
    pub fn register_account(&self, username: &str, password: &str, user: User) {
        self.accounts.write().unwrap().insert(
            username.to_string(),
            MockAccount {
                password: password.to_string(),
                user,
            },
        );
    }

    /// Store a university.
    pub fn register_university(&self, university: University) {
        self.universities.write().unwrap().push(university);
    }

    /// Set the message every following vote mutation answers with.
    pub fn set_vote_message(&self, message: &str) {
        *self.vote_message.write().unwrap() = message.to_string();
    }

    /// Set the aggregate the count endpoints answer with for an entity.
    pub fn set_vote_counts(&self, entity: EntityRef, counts: VotesCount) {
        self.vote_counts.write().unwrap().insert(entity, counts);
    }

    /// Delay every following vote mutation, to hold calls "in flight".
    pub fn set_vote_delay(&self, delay: Duration) {
        *self.vote_delay.write().unwrap() = Some(delay);
    }

    /// Make every following vote mutation fail with a server error.
    pub fn set_vote_failure(&self, fail: bool) {
        *self.vote_failure.write().unwrap() = fail;
    }

    pub fn set_admin_dashboard(&self, dashboard: AdminDashboard) {
        *self.admin_dashboard.write().unwrap() = dashboard;
    }

    pub fn set_moderator_dashboard(&self, dashboard: ModeratorDashboard) {
        *self.moderator_dashboard.write().unwrap() = dashboard;
    }

    /// How many vote mutations reached the backend for one entity.
    pub fn vote_call_count(&self, entity: EntityRef) -> u64 {
        self.vote_calls
            .read()
            .unwrap()
            .get(&entity)
            .copied()
            .unwrap_or(0)
    }

    /// How many vote mutations reached the backend in total.
    pub fn total_vote_calls(&self) -> u64 {
        self.vote_calls.read().unwrap().values().sum()
    }

    async fn record_vote(&self, entity: EntityRef) -> Result<String, ApiError> {
        *self.vote_calls.write().unwrap().entry(entity).or_insert(0) += 1;

        let delay = *self.vote_delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.vote_failure.read().unwrap() {
            return Err(ApiError::Server {
                status: 500,
                message: "mock vote failure".to_string(),
            });
        }
        Ok(self.vote_message.read().unwrap().clone())
    }

    fn counts_for(&self, entity: EntityRef) -> VotesCount {
        self.vote_counts
            .read()
            .unwrap()
            .get(&entity)
            .copied()
            .unwrap_or_default()
    }
}

impl Default for MockForumApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl VotesApi for MockForumApi {
    async fn upvote_post(&self, post_id: u64) -> Result<String, ApiError> {
        self.record_vote(EntityRef::Post(post_id)).await
    }

    async fn downvote_post(&self, post_id: u64) -> Result<String, ApiError> {
        self.record_vote(EntityRef::Post(post_id)).await
    }

    async fn upvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError> {
        self.record_vote(EntityRef::Comment(comment_id)).await
    }

    async fn downvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError> {
        self.record_vote(EntityRef::Comment(comment_id)).await
    }

    async fn post_vote_counts(&self, post_id: u64) -> Result<VotesCount, ApiError> {
        Ok(self.counts_for(EntityRef::Post(post_id)))
    }

    async fn comment_vote_counts(&self, comment_id: Uuid) -> Result<VotesCount, ApiError> {
        Ok(self.counts_for(EntityRef::Comment(comment_id)))
    }
}

#[async_trait::async_trait]
impl PostsApi for MockForumApi {
    async fn all_posts(&self) -> Result<Vec<Post>, ApiError> {
        let mut posts: Vec<Post> = self.posts.read().unwrap().values().cloned().collect();
        posts.sort_by_key(|post| post.id);
        Ok(posts)
    }

    async fn post(&self, id: u64) -> Result<Post, ApiError> {
        self.posts
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("post {}", id)))
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        let id = self.next_post_id.fetch_add(1, Ordering::SeqCst);
        let author = self
            .current_user
            .read()
            .unwrap()
            .as_ref()
            .map(|user| user.display_name().to_string());
        let created = Post {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
            author_name: author,
            university: post.university.clone(),
            status: Some("PENDING".to_string()),
            upvotes: 0,
            downvotes: 0,
            vote_count: 0,
            comment_count: 0,
            created_at: Some(now_stamp()),
            updated_at: None,
        };
        self.posts.write().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update_post(&self, id: u64, post: &NewPost) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().unwrap();
        let stored = posts
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("post {}", id)))?;
        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.updated_at = Some(now_stamp());
        Ok(stored.clone())
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        self.posts
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound(format!("post {}", id)))?;
        self.comments.write().unwrap().remove(&id);
        Ok(())
    }

    async fn posts_by_university(&self, university: &str) -> Result<Vec<Post>, ApiError> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|post| post.university.as_deref() == Some(university))
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.id);
        Ok(posts)
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError> {
        let needle = query.to_lowercase();
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.id);
        Ok(posts)
    }
}

#[async_trait::async_trait]
impl CommentsApi for MockForumApi {
    async fn comments_for_post(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        Ok(self
            .comments
            .read()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
        let author = self
            .current_user
            .read()
            .unwrap()
            .as_ref()
            .map(|user| user.display_name().to_string());
        let created = Comment {
            id: Uuid::new_v4(),
            content: comment.content.clone(),
            author_name: author,
            created_at: now_stamp(),
            upvotes: 0,
            downvotes: 0,
        };
        self.comments
            .write()
            .unwrap()
            .entry(post_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let mut all = self.comments.write().unwrap();
        for comments in all.values_mut() {
            if let Some(stored) = comments.iter_mut().find(|c| c.id == comment_id) {
                stored.content = comment.content.clone();
                return Ok(stored.clone());
            }
        }
        Err(ApiError::NotFound(format!("comment {}", comment_id)))
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        let mut all = self.comments.write().unwrap();
        for comments in all.values_mut() {
            let before = comments.len();
            comments.retain(|c| c.id != comment_id);
            if comments.len() != before {
                return Ok(());
            }
        }
        Err(ApiError::NotFound(format!("comment {}", comment_id)))
    }
}

#[async_trait::async_trait]
impl AuthApi for MockForumApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let accounts = self.accounts.read().unwrap();
        let account = accounts
            .get(&credentials.username)
            .filter(|account| account.password == credentials.password)
            .ok_or(ApiError::Unauthorized)?;

        *self.current_user.write().unwrap() = Some(account.user.clone());
        Ok(LoginResponse {
            token: format!("mock-token-{}", credentials.username),
            user: Some(account.user.clone()),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        let user = User {
            id: self.accounts.read().unwrap().len() as u64 + 1,
            email: Some(registration.email.clone()),
            full_name: Some(registration.full_name.clone()),
            university: Some(registration.university.clone()),
            role: Default::default(),
        };
        self.accounts.write().unwrap().insert(
            registration.email.clone(),
            MockAccount {
                password: registration.password.clone(),
                user,
            },
        );
        Ok("Registration successful".to_string())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.current_user
            .read()
            .unwrap()
            .clone()
            .ok_or(ApiError::Unauthorized)
    }
}

#[async_trait::async_trait]
impl UniversitiesApi for MockForumApi {
    async fn all_universities(&self) -> Result<Vec<University>, ApiError> {
        Ok(self.universities.read().unwrap().clone())
    }

    async fn university(&self, id: u64) -> Result<University, ApiError> {
        self.universities
            .read()
            .unwrap()
            .iter()
            .find(|university| university.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("university {}", id)))
    }
}

#[async_trait::async_trait]
impl AdminApi for MockForumApi {
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        Ok(self.admin_dashboard.read().unwrap().clone())
    }

    async fn set_post_management(&self, enabled: bool) -> Result<String, ApiError> {
        self.admin_dashboard.write().unwrap().post_management_enabled = enabled;
        Ok(if enabled {
            "Post management enabled".to_string()
        } else {
            "Post management disabled".to_string()
        })
    }

    async fn promote_user(&self, user_id: u64, university: &str) -> Result<String, ApiError> {
        Ok(format!(
            "User {} promoted to moderator for {}",
            user_id, university
        ))
    }

    async fn admin_delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        let mut accounts = self.accounts.write().unwrap();
        let username = accounts
            .iter()
            .find(|(_, account)| account.user.id == user_id)
            .map(|(username, _)| username.clone())
            .ok_or_else(|| ApiError::NotFound(format!("user {}", user_id)))?;
        accounts.remove(&username);
        Ok(())
    }

    async fn admin_delete_post(&self, post_id: u64) -> Result<(), ApiError> {
        self.delete_post(post_id).await
    }

    async fn admin_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        self.delete_comment(comment_id).await
    }
}

#[async_trait::async_trait]
impl ModeratorApi for MockForumApi {
    async fn moderator_dashboard(&self) -> Result<ModeratorDashboard, ApiError> {
        Ok(self.moderator_dashboard.read().unwrap().clone())
    }

    async fn moderator_delete_post(&self, post_id: u64) -> Result<(), ApiError> {
        self.delete_post(post_id).await
    }

    async fn moderator_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        self.delete_comment(comment_id).await
    }

    async fn ban_user(&self, user_id: u64) -> Result<String, ApiError> {
        Ok(format!("User {} banned", user_id))
    }

    async fn unban_user(&self, user_id: u64) -> Result<String, ApiError> {
        Ok(format!("User {} unbanned", user_id))
    }
}

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
