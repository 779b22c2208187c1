//! Media endpoints, including the multipart file upload.

use async_stream::stream;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{Media, NewMedia};
use crate::SkilletClient;

/// Chunk size for streaming upload bodies.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// An in-memory file to upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl SkilletClient {
    /// Fetch every media record.
    pub async fn all_media(&self) -> Result<Vec<Media>> {
        self.get_json("/media").await
    }

    /// Fetch a single media record.
    pub async fn get_media(&self, id: &str) -> Result<Media> {
        self.get_json(&format!("/media/{}", id)).await
    }

    /// Fetch the media attached to a post.
    pub async fn media_by_post(&self, post_id: &str) -> Result<Vec<Media>> {
        self.get_json(&format!("/media/post/{}", post_id)).await
    }

    /// Create a media record pointing at an already-uploaded file.
    pub async fn create_media(&self, media: &NewMedia) -> Result<Media> {
        self.post_json(&format!("/media/post/{}", media.related_post), media)
            .await
    }

    /// Update a media record.
    pub async fn update_media(&self, id: &str, media: &NewMedia) -> Result<Media> {
        self.put_json(&format!("/media/{}", id), media).await
    }

    /// Delete a media record. Returns `true` on `204 No Content`.
    pub async fn delete_media(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/media/{}", id)).await
    }

    /// Absolute URL for a stored media path, as returned by [`upload_media`].
    ///
    /// [`upload_media`]: SkilletClient::upload_media
    pub fn media_url(&self, media_path: &str) -> String {
        format!("{}/media/files/{}", self.base_url(), media_path)
    }

    /// Upload a file as `multipart/form-data` and return the stored path.
    ///
    /// `kind` is the platform media type, `"image"` or `"video"`.
    /// `on_progress` is called with 0-100 as file bytes are handed to the
    /// transport; it always ends on 100 for a body that sent fully.
    pub async fn upload_media(
        &self,
        file: UploadFile,
        kind: &str,
        post_id: &str,
        on_progress: impl Fn(u8) + Send + Sync + 'static,
    ) -> Result<String> {
        let total = file.bytes.len();
        let bytes = file.bytes.clone();

        let body_stream = stream! {
            if total == 0 {
                on_progress(100);
            } else {
                let mut sent = 0usize;
                while sent < total {
                    let end = usize::min(sent + UPLOAD_CHUNK_SIZE, total);
                    let chunk = bytes.slice(sent..end);
                    sent = end;
                    on_progress(((sent * 100) / total) as u8);
                    yield Ok::<Bytes, std::io::Error>(chunk);
                }
            }
        };

        let part = Part::stream_with_length(Body::wrap_stream(body_stream), total as u64)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("type", kind.to_string())
            .text("postId", post_id.to_string());

        let resp = self
            .request(Method::POST, "/media/upload")
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // The endpoint answers with the stored path, sometimes JSON-quoted.
        let path = resp.text().await?;
        let path = path.trim().trim_matches('"').to_string();

        debug!(
            file_name = %file.file_name,
            size = total,
            path = %path,
            "Uploaded media file"
        );

        Ok(path)
    }
}
