//! Storage traits for posts and their media records.
//!
//! The storage layer is split into focused traits:
//! - `PostStore`: the post records themselves
//! - `MediaStore`: media records pointing at uploaded files
//! - `PlatformStore`: composite trait combining both

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::post::{Media, NewMedia, NewPost, Post};

/// Store for post records.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a post and return it with its assigned id.
    async fn create_post(&self, post: &NewPost) -> StoreResult<Post>;

    /// Replace a post's fields.
    async fn update_post(&self, id: &str, post: &NewPost) -> StoreResult<Post>;

    /// Delete a post. `true` when the backend confirmed the deletion.
    async fn delete_post(&self, id: &str) -> StoreResult<bool>;

    /// Get a post by id.
    async fn get_post(&self, id: &str) -> StoreResult<Post>;

    /// All posts, newest first.
    async fn all_posts(&self) -> StoreResult<Vec<Post>>;

    /// One user's posts, newest first.
    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>>;

    /// Like a post as the acting user, returning it with its refreshed
    /// like count.
    async fn like_post(&self, id: &str) -> StoreResult<Post>;

    /// Withdraw the acting user's like.
    async fn unlike_post(&self, id: &str) -> StoreResult<Post>;
}

/// Store for media records.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Create a media record and return it with its assigned id.
    async fn create_media(&self, media: &NewMedia) -> StoreResult<Media>;

    /// Delete a media record. `true` when the backend confirmed the
    /// deletion.
    async fn delete_media(&self, id: &str) -> StoreResult<bool>;

    /// The media attached to a post, in attachment order.
    async fn media_by_post(&self, post_id: &str) -> StoreResult<Vec<Media>>;
}

/// Composite storage trait combining posts and media.
///
/// This is the main trait used by the authoring session.
pub trait PlatformStore: PostStore + MediaStore {}

// Blanket implementation: anything implementing both traits is a PlatformStore
impl<T: PostStore + MediaStore> PlatformStore for T {}
