//! Like endpoints.

use serde_json::json;

use crate::error::Result;
use crate::types::{Like, LikeStatus};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every like on the platform.
    pub async fn all_likes(&self) -> Result<Vec<Like>> {
        self.get_json("/likes").await
    }

    /// Fetch the likes on a post.
    pub async fn likes_by_post(&self, post_id: &str) -> Result<Vec<Like>> {
        self.get_json(&format!("/likes/post/{}", post_id)).await
    }

    /// Fetch a single like record.
    pub async fn get_like(&self, id: &str) -> Result<Like> {
        self.get_json(&format!("/likes/{}", id)).await
    }

    /// Like a post as the acting user.
    pub async fn create_like(&self, post_id: &str) -> Result<Like> {
        let user_id = self.current_user()?;
        let body = json!({
            "userId": user_id,
            "postId": post_id,
        });
        self.post_json(&format!("/likes/post/{}", post_id), &body)
            .await
    }

    /// Remove a like record. Returns `true` on `204 No Content`.
    pub async fn delete_like(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/likes/{}", id)).await
    }

    /// Whether the acting user has liked a post, and with which like record.
    pub async fn like_status(&self, post_id: &str) -> Result<LikeStatus> {
        let user_id = self.current_user()?;
        self.get_json(&format!("/likes/post/{}/{}/status", post_id, user_id))
            .await
    }
}
