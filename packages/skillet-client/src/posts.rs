//! Cooking post endpoints.

use crate::error::Result;
use crate::types::{NewPost, Post};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every post on the platform.
    pub async fn all_posts(&self) -> Result<Vec<Post>> {
        self.get_json("/posts").await
    }

    /// Fetch posts created by one user.
    pub async fn posts_by_user(&self, user_id: &str) -> Result<Vec<Post>> {
        self.get_json(&format!("/posts/my-posts/{}", user_id)).await
    }

    /// Fetch a single post.
    pub async fn get_post(&self, id: &str) -> Result<Post> {
        self.get_json(&format!("/posts/{}", id)).await
    }

    /// Create a new post.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.post_json("/posts", post).await
    }

    /// Update an existing post.
    pub async fn update_post(&self, id: &str, post: &NewPost) -> Result<Post> {
        self.put_json(&format!("/posts/{}", id), post).await
    }

    /// Delete a post. Returns `true` when the API answers `204 No Content`.
    pub async fn delete_post(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/posts/{}", id)).await
    }

    /// Like a post, returning it with its refreshed like count.
    pub async fn like_post(&self, post_id: &str) -> Result<Post> {
        self.post_empty(&format!("/posts/{}/like", post_id)).await
    }

    /// Unlike a post, returning it with its refreshed like count.
    pub async fn unlike_post(&self, post_id: &str) -> Result<Post> {
        self.post_empty(&format!("/posts/{}/unlike", post_id)).await
    }
}
