//! Selection-time validation of media attachments.
//!
//! Checks run in cost order: content types first, then the count caps,
//! then duration probes on any incoming videos. The whole batch is
//! accepted or rejected together, and rejection leaves the already
//! attached media untouched.

use std::time::Duration;

use crate::error::{SelectionError, SelectionResult};
use crate::traits::probe::MediaProbe;
use crate::types::media::{MediaKind, PendingMediaSet, SelectedFile};

/// Most media files attachable to one post.
pub const MAX_MEDIA_ITEMS: usize = 3;

/// Most videos attachable to one post.
pub const MAX_VIDEOS: usize = 1;

/// Longest acceptable video.
pub const MAX_VIDEO_DURATION: Duration = Duration::from_secs(30);

/// A file that passed every selection check, with its classification.
#[derive(Debug, Clone)]
pub struct AcceptedFile {
    pub file: SelectedFile,
    pub kind: MediaKind,
}

/// The caps applied when files are selected.
///
/// Counts are measured over the whole draft, attachments already present
/// included, so an edit session cannot sneak past the caps by adding in
/// smaller batches.
#[derive(Debug, Clone)]
pub struct MediaValidationPolicy {
    max_items: usize,
    max_videos: usize,
    max_video_duration: Duration,
}

impl Default for MediaValidationPolicy {
    fn default() -> Self {
        Self {
            max_items: MAX_MEDIA_ITEMS,
            max_videos: MAX_VIDEOS,
            max_video_duration: MAX_VIDEO_DURATION,
        }
    }
}

impl MediaValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_max_videos(mut self, max_videos: usize) -> Self {
        self.max_videos = max_videos;
        self
    }

    pub fn with_max_video_duration(mut self, limit: Duration) -> Self {
        self.max_video_duration = limit;
        self
    }

    /// Validate a batch of picked files against what is already attached.
    ///
    /// Returns the files with their classifications when every check
    /// passes, or the first failure.
    pub async fn check_selection<P: MediaProbe>(
        &self,
        probe: &P,
        current: &PendingMediaSet,
        files: &[SelectedFile],
    ) -> SelectionResult<Vec<AcceptedFile>> {
        // 1. Every file must be an image or a video.
        let mut accepted = Vec::with_capacity(files.len());
        for file in files {
            let kind = file.kind().ok_or_else(|| SelectionError::UnsupportedFileType {
                name: file.file_name.clone(),
                content_type: file.content_type.clone(),
            })?;
            accepted.push(AcceptedFile {
                file: file.clone(),
                kind,
            });
        }

        // 2. Count caps over the whole draft.
        if current.len() + accepted.len() > self.max_items {
            return Err(SelectionError::TooManyItems {
                limit: self.max_items,
            });
        }

        let incoming_videos = accepted.iter().filter(|a| a.kind.is_video()).count();
        if current.video_count() + incoming_videos > self.max_videos {
            return Err(SelectionError::TooManyVideos {
                limit: self.max_videos,
            });
        }

        // 3. Duration probes for incoming videos, first offender wins.
        for item in accepted.iter().filter(|a| a.kind.is_video()) {
            let duration = probe.video_duration(&item.file).await.map_err(|source| {
                SelectionError::ProbeFailed {
                    name: item.file.file_name.clone(),
                    source,
                }
            })?;
            if duration > self.max_video_duration {
                return Err(SelectionError::VideoTooLong {
                    name: item.file.file_name.clone(),
                    duration,
                    limit: self.max_video_duration,
                });
            }
        }

        Ok(accepted)
    }
}
