//! The binary upload seam.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::UploadResult;
use crate::types::media::SelectedFile;

/// Callback fed upload progress as a 0-100 percentage.
///
/// Implementations may call it from another task, so it must be
/// thread-safe. Out-of-order or repeated percentages are the consumer's
/// problem; the progress tracker keeps the last value written.
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Uploads file bytes somewhere and returns the URL where they ended up.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload a file destined for `related_post`, reporting progress along
    /// the way, and return the stored file's URL.
    async fn upload(
        &self,
        file: &SelectedFile,
        related_post: &str,
        on_progress: ProgressCallback,
    ) -> UploadResult<String>;
}
