//! Adapters backed by the Skillet REST API.
//!
//! Available with the `skillet` feature. [`RemoteStore`] persists posts
//! and media through a [`SkilletClient`], [`RemoteUploader`] streams
//! files to the upload endpoint, and [`ClientIdentity`] reads the acting
//! user off the client configuration. Pair them with a [`MediaProbe`]
//! from the embedding application; the platform has no remote probe.
//!
//! [`MediaProbe`]: crate::traits::probe::MediaProbe

use async_trait::async_trait;
use chrono::Utc;
use skillet_client::{ClientError, SkilletClient, UploadFile};

use crate::error::{StoreError, StoreResult, UploadError, UploadResult};
use crate::traits::identity::Identity;
use crate::traits::store::{MediaStore, PostStore};
use crate::traits::uploader::{MediaUploader, ProgressCallback};
use crate::types::media::{MediaKind, SelectedFile};
use crate::types::post::{Media, NewMedia, NewPost, Post};

fn backend(err: ClientError) -> StoreError {
    StoreError::Backend(Box::new(err))
}

/// Error mapping for operations addressing a record by id.
fn lookup_error(id: &str, err: ClientError) -> StoreError {
    match err {
        ClientError::Api { status: 404, .. } => StoreError::NotFound { id: id.to_string() },
        other => backend(other),
    }
}

fn upload_error(err: ClientError) -> UploadError {
    match err {
        ClientError::Api { status, message } => {
            UploadError::Rejected(format!("{} (status {})", message, status))
        }
        other => UploadError::Transport(Box::new(other)),
    }
}

fn kind_from_wire(kind: &str) -> MediaKind {
    if kind.eq_ignore_ascii_case("video") {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

fn post_from_wire(post: skillet_client::Post) -> Post {
    Post {
        id: post.id,
        title: post.title,
        description: post.description,
        created_by: post.created_by.map(|user| user.id),
        // Endpoints that omit the timestamp get the epoch.
        created_at: post.created_at.unwrap_or_default(),
        like_count: post.like_count.unwrap_or(0),
    }
}

fn media_from_wire(media: skillet_client::Media, post_id: &str) -> Media {
    Media {
        id: media.id,
        kind: kind_from_wire(&media.kind),
        url: media.url,
        related_post: media.related_post.unwrap_or_else(|| post_id.to_string()),
    }
}

/// Post and media storage backed by the Skillet REST API.
#[derive(Clone)]
pub struct RemoteStore {
    client: SkilletClient,
}

impl RemoteStore {
    pub fn new(client: SkilletClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostStore for RemoteStore {
    async fn create_post(&self, post: &NewPost) -> StoreResult<Post> {
        let mut body =
            skillet_client::NewPost::new(post.title.clone(), post.description.clone());
        body.created_by = post.created_by.clone();
        let created = self.client.create_post(&body).await.map_err(backend)?;
        Ok(post_from_wire(created))
    }

    async fn update_post(&self, id: &str, post: &NewPost) -> StoreResult<Post> {
        // PUT replaces the whole record, so carry the stored timestamp and
        // like count forward instead of clobbering them.
        let current = self
            .client
            .get_post(id)
            .await
            .map_err(|e| lookup_error(id, e))?;
        let mut body =
            skillet_client::NewPost::new(post.title.clone(), post.description.clone());
        body.created_at = current.created_at.unwrap_or_else(Utc::now);
        body.like_count = current.like_count.unwrap_or(0);
        body.created_by = post.created_by.clone();
        let updated = self
            .client
            .update_post(id, &body)
            .await
            .map_err(|e| lookup_error(id, e))?;
        Ok(post_from_wire(updated))
    }

    async fn delete_post(&self, id: &str) -> StoreResult<bool> {
        self.client
            .delete_post(id)
            .await
            .map_err(|e| lookup_error(id, e))
    }

    async fn get_post(&self, id: &str) -> StoreResult<Post> {
        let post = self
            .client
            .get_post(id)
            .await
            .map_err(|e| lookup_error(id, e))?;
        Ok(post_from_wire(post))
    }

    async fn all_posts(&self) -> StoreResult<Vec<Post>> {
        let posts = self.client.all_posts().await.map_err(backend)?;
        Ok(posts.into_iter().map(post_from_wire).collect())
    }

    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>> {
        let posts = self
            .client
            .posts_by_user(user_id)
            .await
            .map_err(backend)?;
        Ok(posts.into_iter().map(post_from_wire).collect())
    }

    async fn like_post(&self, id: &str) -> StoreResult<Post> {
        let post = self
            .client
            .like_post(id)
            .await
            .map_err(|e| lookup_error(id, e))?;
        Ok(post_from_wire(post))
    }

    async fn unlike_post(&self, id: &str) -> StoreResult<Post> {
        let post = self
            .client
            .unlike_post(id)
            .await
            .map_err(|e| lookup_error(id, e))?;
        Ok(post_from_wire(post))
    }
}

#[async_trait]
impl MediaStore for RemoteStore {
    async fn create_media(&self, media: &NewMedia) -> StoreResult<Media> {
        let body = skillet_client::NewMedia {
            kind: media.kind.as_str().to_string(),
            url: media.url.clone(),
            delete_status: false,
            related_post: media.related_post.clone(),
        };
        let created = self.client.create_media(&body).await.map_err(backend)?;
        Ok(media_from_wire(created, &media.related_post))
    }

    async fn delete_media(&self, id: &str) -> StoreResult<bool> {
        self.client
            .delete_media(id)
            .await
            .map_err(|e| lookup_error(id, e))
    }

    async fn media_by_post(&self, post_id: &str) -> StoreResult<Vec<Media>> {
        let media = self
            .client
            .media_by_post(post_id)
            .await
            .map_err(backend)?;
        Ok(media
            .into_iter()
            .map(|m| media_from_wire(m, post_id))
            .collect())
    }
}

/// Upload service backed by the Skillet multipart endpoint.
///
/// Returns the absolute file URL built from the stored path the endpoint
/// answers with.
#[derive(Clone)]
pub struct RemoteUploader {
    client: SkilletClient,
}

impl RemoteUploader {
    pub fn new(client: SkilletClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaUploader for RemoteUploader {
    async fn upload(
        &self,
        file: &SelectedFile,
        related_post: &str,
        on_progress: ProgressCallback,
    ) -> UploadResult<String> {
        // Selection policy only admits classified files; an unclassified
        // one slipping through is treated as an image.
        let kind = file.kind().unwrap_or(MediaKind::Image);
        let upload = UploadFile::new(
            file.file_name.clone(),
            file.content_type.clone(),
            file.bytes.clone(),
        );
        let path = self
            .client
            .upload_media(upload, kind.as_str(), related_post, move |percent| {
                on_progress(percent)
            })
            .await
            .map_err(upload_error)?;
        Ok(self.client.media_url(&path))
    }
}

/// Identity read from the client's configured acting user.
#[derive(Clone)]
pub struct ClientIdentity {
    client: SkilletClient,
}

impl ClientIdentity {
    pub fn new(client: SkilletClient) -> Self {
        Self { client }
    }
}

impl Identity for ClientIdentity {
    fn current_user(&self) -> Option<String> {
        self.client.user_id().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_wire() {
        assert_eq!(kind_from_wire("video"), MediaKind::Video);
        assert_eq!(kind_from_wire("Video"), MediaKind::Video);
        assert_eq!(kind_from_wire("image"), MediaKind::Image);
        assert_eq!(kind_from_wire("banner"), MediaKind::Image);
    }

    #[test]
    fn test_lookup_error_maps_missing_records() {
        let err = lookup_error(
            "post-9",
            ClientError::Api {
                status: 404,
                message: "no such post".into(),
            },
        );
        assert!(matches!(err, StoreError::NotFound { id } if id == "post-9"));

        let err = lookup_error(
            "post-9",
            ClientError::Api {
                status: 500,
                message: "boom".into(),
            },
        );
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
