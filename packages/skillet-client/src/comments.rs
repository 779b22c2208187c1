//! Comment endpoints.

use chrono::Utc;
use reqwest::Method;
use serde_json::json;

use crate::error::Result;
use crate::types::Comment;
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every comment on the platform.
    pub async fn all_comments(&self) -> Result<Vec<Comment>> {
        self.get_json("/comments").await
    }

    /// Fetch the comments on a post.
    pub async fn comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.get_json(&format!("/comments/post/{}", post_id)).await
    }

    /// Fetch a single comment.
    pub async fn get_comment(&self, id: &str) -> Result<Comment> {
        self.get_json(&format!("/comments/{}", id)).await
    }

    /// Comment on a post as the acting user.
    pub async fn create_comment(&self, post_id: &str, text: &str) -> Result<Comment> {
        let user_id = self.current_user()?;
        let body = json!({
            "comment": text,
            "commentedBy": user_id,
            "deleteStatus": false,
            "commentedOn": post_id,
            "commentedAt": Utc::now(),
        });
        self.post_json(&format!("/comments/post/{}", post_id), &body)
            .await
    }

    /// Replace a comment's text.
    ///
    /// The API takes the new text as a bare `text/plain` body here, not JSON.
    pub async fn update_comment(&self, id: &str, text: &str) -> Result<Comment> {
        let resp = self
            .request(Method::PUT, &format!("/comments/{}", id))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Delete a comment. Returns `true` on `204 No Content`.
    pub async fn delete_comment(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/comments/{}", id)).await
    }
}
