//! Pure Skillet REST API client.
//!
//! A minimal client for the Skillet cooking-platform API with no domain
//! logic. Covers posts, media, comments, likes, groups, group posts, tasks,
//! task completions, learning plans, progress updates, and notifications.
//!
//! # Example
//!
//! ```rust,ignore
//! use skillet_client::{NewPost, SkilletClient};
//!
//! let client = SkilletClient::new("http://localhost:8080/api")
//!     .with_token("st-api-token")
//!     .with_user("user-42");
//!
//! let post = client
//!     .create_post(&NewPost::new("Sourdough basics", "A starter guide to starters."))
//!     .await?;
//!
//! for media in client.media_by_post(&post.id).await? {
//!     println!("{} -> {}", media.kind, media.url);
//! }
//! ```

pub mod comments;
pub mod error;
pub mod group_posts;
pub mod groups;
pub mod likes;
pub mod media;
pub mod notifications;
pub mod plans;
pub mod posts;
pub mod progress_updates;
pub mod task_completions;
pub mod tasks;
pub mod token;
pub mod types;

pub use error::{ClientError, Result};
pub use media::UploadFile;
pub use token::ApiToken;
pub use types::*;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Pure Skillet API client.
#[derive(Clone)]
pub struct SkilletClient {
    http_client: Client,
    base_url: String,
    token: Option<ApiToken>,
    user_id: Option<String>,
}

impl SkilletClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            user_id: None,
        }
    }

    /// Create from environment variables.
    ///
    /// `SKILLET_API_URL` is required; `SKILLET_API_TOKEN` and
    /// `SKILLET_USER_ID` are picked up when present.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SKILLET_API_URL")
            .map_err(|_| ClientError::Config("SKILLET_API_URL not set".into()))?;
        let mut client = Self::new(base_url);
        if let Ok(token) = std::env::var("SKILLET_API_TOKEN") {
            client = client.with_token(token);
        }
        if let Ok(user_id) = std::env::var("SKILLET_USER_ID") {
            client = client.with_user(user_id);
        }
        Ok(client)
    }

    /// Attach a bearer token used on every request.
    pub fn with_token(mut self, token: impl Into<ApiToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the acting user. Required by the endpoints that stamp ownership.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Swap in a preconfigured `reqwest` client (timeouts, proxies, etc.).
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the acting user id, if one is configured.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Acting user id, or a `Config` error for endpoints that need one.
    pub(crate) fn current_user(&self) -> Result<&str> {
        self.user_id.as_deref().ok_or_else(|| {
            ClientError::Config(
                "no acting user configured; call with_user() or set SKILLET_USER_ID".into(),
            )
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer token applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http_client.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token.expose());
        }
        req
    }

    /// Check the status and decode a JSON body.
    pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.request(Method::GET, path).send().await?;
        Self::read_json(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        Self::read_json(resp).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.request(Method::PUT, path).json(body).send().await?;
        Self::read_json(resp).await
    }

    /// POST with no body, for action endpoints like like/unlike.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.request(Method::POST, path).send().await?;
        Self::read_json(resp).await
    }

    /// DELETE; the API signals success with `204 No Content`.
    pub(crate) async fn delete(&self, path: &str) -> Result<bool> {
        let resp = self.request(Method::DELETE, path).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(status == reqwest::StatusCode::NO_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = SkilletClient::new("http://localhost:8080/api/").with_user("user-42");

        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.user_id(), Some("user-42"));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = SkilletClient::new("http://localhost:8080/api");
        assert_eq!(client.url("/posts"), "http://localhost:8080/api/posts");
    }

    #[test]
    fn test_current_user_requires_configuration() {
        let client = SkilletClient::new("http://localhost:8080/api");
        assert!(client.current_user().is_err());
    }
}
