//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::store::{MediaStore, PostStore};
use crate::types::post::{Media, NewMedia, NewPost, Post};

/// In-memory storage for posts and media records.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<String, Post>>,
    media: RwLock<HashMap<String, Media>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.posts.write().unwrap().clear();
        self.media.write().unwrap().clear();
    }

    /// Get the number of stored posts.
    pub fn post_count(&self) -> usize {
        self.posts.read().unwrap().len()
    }

    /// Get the number of stored media records.
    pub fn media_count(&self) -> usize {
        self.media.read().unwrap().len()
    }

    /// Insert a post as-is, keeping its id. For seeding test fixtures.
    pub fn insert_post(&self, post: Post) {
        self.posts.write().unwrap().insert(post.id.clone(), post);
    }

    /// Insert a media record as-is, keeping its id. For seeding test
    /// fixtures.
    pub fn insert_media(&self, media: Media) {
        self.media.write().unwrap().insert(media.id.clone(), media);
    }

    fn assign_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, n)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(&self, post: &NewPost) -> StoreResult<Post> {
        let created = Post {
            id: self.assign_id("post"),
            title: post.title.clone(),
            description: post.description.clone(),
            created_by: post.created_by.clone(),
            created_at: Utc::now(),
            like_count: 0,
        };
        self.posts
            .write()
            .unwrap()
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn update_post(&self, id: &str, post: &NewPost) -> StoreResult<Post> {
        let mut posts = self.posts.write().unwrap();
        let existing = posts.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        existing.title = post.title.clone();
        existing.description = post.description.clone();
        Ok(existing.clone())
    }

    async fn delete_post(&self, id: &str) -> StoreResult<bool> {
        self.posts
            .write()
            .unwrap()
            .remove(id)
            .map(|_| true)
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
            })
    }

    async fn get_post(&self, id: &str) -> StoreResult<Post> {
        self.posts
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
            })
    }

    async fn all_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.read().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|p| p.created_by.as_deref() == Some(user_id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn like_post(&self, id: &str) -> StoreResult<Post> {
        let mut posts = self.posts.write().unwrap();
        let post = posts.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        post.like_count += 1;
        Ok(post.clone())
    }

    async fn unlike_post(&self, id: &str) -> StoreResult<Post> {
        let mut posts = self.posts.write().unwrap();
        let post = posts.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        post.like_count = (post.like_count - 1).max(0);
        Ok(post.clone())
    }
}

#[async_trait]
impl MediaStore for MemoryStore {
    async fn create_media(&self, media: &NewMedia) -> StoreResult<Media> {
        let created = Media {
            id: self.assign_id("media"),
            kind: media.kind,
            url: media.url.clone(),
            related_post: media.related_post.clone(),
        };
        self.media
            .write()
            .unwrap()
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn delete_media(&self, id: &str) -> StoreResult<bool> {
        self.media
            .write()
            .unwrap()
            .remove(id)
            .map(|_| true)
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
            })
    }

    async fn media_by_post(&self, post_id: &str) -> StoreResult<Vec<Media>> {
        let mut media: Vec<Media> = self
            .media
            .read()
            .unwrap()
            .values()
            .filter(|m| m.related_post == post_id)
            .cloned()
            .collect();
        // HashMap order is arbitrary; ids are sequential, so sort on them
        media.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::media::MediaKind;

    fn new_post(title: &str, user: &str) -> NewPost {
        NewPost {
            title: title.into(),
            description: "a description".into(),
            created_by: Some(user.into()),
        }
    }

    #[tokio::test]
    async fn test_create_update_get_post() {
        let store = MemoryStore::new();

        let created = store.create_post(&new_post("Ramen", "user-1")).await.unwrap();
        assert_eq!(created.title, "Ramen");
        assert_eq!(created.like_count, 0);

        let updated = store
            .update_post(
                &created.id,
                &NewPost {
                    title: "Tonkotsu ramen".into(),
                    description: "richer broth".into(),
                    created_by: Some("user-1".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Tonkotsu ramen");

        let fetched = store.get_post(&created.id).await.unwrap();
        assert_eq!(fetched.description, "richer broth");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_post("post-999", &new_post("x", "user-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == "post-999"));
    }

    #[tokio::test]
    async fn test_posts_by_user_filters() {
        let store = MemoryStore::new();
        store.create_post(&new_post("A", "user-1")).await.unwrap();
        store.create_post(&new_post("B", "user-2")).await.unwrap();
        store.create_post(&new_post("C", "user-1")).await.unwrap();

        let mine = store.posts_by_user("user-1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.created_by.as_deref() == Some("user-1")));
    }

    #[tokio::test]
    async fn test_media_lifecycle() {
        let store = MemoryStore::new();
        let post = store.create_post(&new_post("Bread", "user-1")).await.unwrap();

        let first = store
            .create_media(&NewMedia {
                kind: MediaKind::Image,
                url: "https://cdn.test/crumb.jpg".into(),
                related_post: post.id.clone(),
            })
            .await
            .unwrap();
        store
            .create_media(&NewMedia {
                kind: MediaKind::Video,
                url: "https://cdn.test/fold.mp4".into(),
                related_post: post.id.clone(),
            })
            .await
            .unwrap();

        let attached = store.media_by_post(&post.id).await.unwrap();
        assert_eq!(attached.len(), 2);
        assert_eq!(attached[0].id, first.id);

        store.delete_media(&first.id).await.unwrap();
        assert_eq!(store.media_by_post(&post.id).await.unwrap().len(), 1);

        let err = store.delete_media(&first.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_like_and_unlike_adjust_count() {
        let store = MemoryStore::new();
        let post = store.create_post(&new_post("Stew", "user-1")).await.unwrap();

        assert_eq!(store.like_post(&post.id).await.unwrap().like_count, 1);
        assert_eq!(store.like_post(&post.id).await.unwrap().like_count, 2);
        assert_eq!(store.unlike_post(&post.id).await.unwrap().like_count, 1);

        // The count never goes negative.
        store.unlike_post(&post.id).await.unwrap();
        assert_eq!(store.unlike_post(&post.id).await.unwrap().like_count, 0);
    }
}
