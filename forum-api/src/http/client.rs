use forum_shared::types::{
    AdminDashboard, Comment, Credentials, LoginResponse, ModeratorDashboard, NewComment, NewPost,
    Post, Registration, University, User, VotesCount,
};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::interfaces::{
    AdminApi, AuthApi, CommentsApi, ModeratorApi, PostsApi, UniversitiesApi, VotesApi,
};
use crate::token::TokenStore;

/// Production client for the forum REST backend.
///
/// Attaches the bearer token from its [`TokenStore`] to every request that
/// has one, and clears the store when the backend answers 401 so a rejected
/// token is not re-sent.
pub struct HttpForumClient {
    base_url: String,
    client: ReqwestClient,
    tokens: TokenStore,
}

impl HttpForumClient {
    /// Create a client for the given API base URL (e.g.
    /// `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: ReqwestClient::new(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // The token is no longer accepted; stop sending it.
            self.tokens.clear();
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(response.url().path().to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: extract_message(&message),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)));
        Ok(self.execute(request).await?.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        Ok(self.execute(request).await?.json().await?)
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        Ok(self.execute(request).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(self.client.delete(self.url(path)));
        self.execute(request).await?;
        Ok(())
    }

    /// POST with no body, returning the backend's free-text message.
    async fn post_message(&self, path: &str) -> Result<String, ApiError> {
        let request = self.authorize(self.client.post(self.url(path)));
        let raw = self.execute(request).await?.text().await?;
        Ok(extract_message(&raw))
    }

    /// POST with a JSON body, returning the backend's free-text message.
    async fn post_json_message<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let raw = self.execute(request).await?.text().await?;
        Ok(extract_message(&raw))
    }
}

/// Normalize a mutation response body to its message.
///
/// The backend answers some mutations with a bare string and others with
/// `{"message": "..."}`; both shapes appear in the wild, so accept either.
pub(crate) fn extract_message(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(message)) => message,
        Ok(serde_json::Value::Object(fields)) => fields
            .get("message")
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| raw.to_string()),
        _ => raw.to_string(),
    }
}

#[async_trait::async_trait]
impl VotesApi for HttpForumClient {
    async fn upvote_post(&self, post_id: u64) -> Result<String, ApiError> {
        self.post_message(&format!("/votes/posts/{}/upvote", post_id))
            .await
    }

    async fn downvote_post(&self, post_id: u64) -> Result<String, ApiError> {
        self.post_message(&format!("/votes/posts/{}/downvote", post_id))
            .await
    }

    async fn upvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError> {
        self.post_message(&format!("/votes/comments/{}/upvote", comment_id))
            .await
    }

    async fn downvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError> {
        self.post_message(&format!("/votes/comments/{}/downvote", comment_id))
            .await
    }

    async fn post_vote_counts(&self, post_id: u64) -> Result<VotesCount, ApiError> {
        self.get_json(&format!("/votes/posts/{}/count", post_id)).await
    }

    async fn comment_vote_counts(&self, comment_id: Uuid) -> Result<VotesCount, ApiError> {
        self.get_json(&format!("/votes/comments/{}/count", comment_id))
            .await
    }
}

#[async_trait::async_trait]
impl PostsApi for HttpForumClient {
    async fn all_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/posts").await
    }

    async fn post(&self, id: u64) -> Result<Post, ApiError> {
        self.get_json(&format!("/posts/{}", id)).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        self.post_json("/posts/create", post).await
    }

    async fn update_post(&self, id: u64, post: &NewPost) -> Result<Post, ApiError> {
        self.put_json(&format!("/posts/{}", id), post).await
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/posts/{}", id)).await
    }

    async fn posts_by_university(&self, university: &str) -> Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/posts/university/{}", university))
            .await
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError> {
        let request = self
            .authorize(self.client.get(self.url("/posts/search")))
            .query(&[("q", query)]);
        Ok(self.execute(request).await?.json().await?)
    }
}

#[async_trait::async_trait]
impl CommentsApi for HttpForumClient {
    async fn comments_for_post(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/comments/{}", post_id)).await
    }

    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json(&format!("/comments/{}", post_id), comment)
            .await
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.put_json(&format!("/comments/{}", comment_id), comment)
            .await
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{}", comment_id)).await
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpForumClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        self.post_json_message("/auth/register", registration).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me").await
    }
}

#[async_trait::async_trait]
impl UniversitiesApi for HttpForumClient {
    async fn all_universities(&self) -> Result<Vec<University>, ApiError> {
        self.get_json("/universities").await
    }

    async fn university(&self, id: u64) -> Result<University, ApiError> {
        self.get_json(&format!("/universities/{}", id)).await
    }
}

#[async_trait::async_trait]
impl AdminApi for HttpForumClient {
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.get_json("/admin/dashboard").await
    }

    async fn set_post_management(&self, enabled: bool) -> Result<String, ApiError> {
        self.post_json_message("/admin/settings/post-management", &json!({ "enabled": enabled }))
            .await
    }

    async fn promote_user(&self, user_id: u64, university: &str) -> Result<String, ApiError> {
        self.post_json_message(
            &format!("/admin/users/{}/promote", user_id),
            &json!({ "university": university }),
        )
        .await
    }

    async fn admin_delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/users/{}", user_id)).await
    }

    async fn admin_delete_post(&self, post_id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/posts/{}", post_id)).await
    }

    async fn admin_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/admin/comments/{}", comment_id)).await
    }
}

#[async_trait::async_trait]
impl ModeratorApi for HttpForumClient {
    async fn moderator_dashboard(&self) -> Result<ModeratorDashboard, ApiError> {
        self.get_json("/moderator/dashboard").await
    }

    async fn moderator_delete_post(&self, post_id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/moderator/posts/{}", post_id)).await
    }

    async fn moderator_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/moderator/comments/{}", comment_id))
            .await
    }

    async fn ban_user(&self, user_id: u64) -> Result<String, ApiError> {
        self.post_message(&format!("/moderator/users/{}/ban", user_id))
            .await
    }

    async fn unban_user(&self, user_id: u64) -> Result<String, ApiError> {
        self.post_message(&format!("/moderator/users/{}/unban", user_id))
            .await
    }
}
