//! Local media being attached to a draft.
//!
//! Attachments are keyed by [`LocalMediaId`], a stable handle that survives
//! removals and reorders. Position indexes do not: removing item 0 while
//! item 1 is mid-upload would silently re-key every progress update.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::types::post::Media;

/// Stable handle for one attachment within a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalMediaId(Uuid);

impl LocalMediaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocalMediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocalMediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the platform considers a media file: an image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME content type. `None` for anything that is neither.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type.starts_with("image/") {
            Some(Self::Image)
        } else if content_type.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-memory file the user picked for attachment.
#[derive(Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl SelectedFile {
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

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Media classification from the content type.
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_content_type(&self.content_type)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

type MakePreview = dyn Fn(LocalMediaId, &SelectedFile) -> String + Send + Sync;
type ReleasePreview = dyn Fn(&str) + Send + Sync;

/// Creates and releases preview URLs for locally attached files.
///
/// The default factory hands out inert `preview://` URLs with a no-op
/// release. A UI plugs its object-URL equivalents in here; the matching
/// release runs exactly once per created preview, whether the attachment
/// is removed, persisted, or the whole form is reset.
#[derive(Clone)]
pub struct PreviewFactory {
    make: Arc<MakePreview>,
    release: Arc<ReleasePreview>,
}

impl PreviewFactory {
    pub fn new(
        make: impl Fn(LocalMediaId, &SelectedFile) -> String + Send + Sync + 'static,
        release: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            make: Arc::new(make),
            release: Arc::new(release),
        }
    }

    /// Create a live preview for a file.
    pub fn preview(&self, id: LocalMediaId, file: &SelectedFile) -> PreviewHandle {
        PreviewHandle {
            url: (self.make)(id, file),
            release: Some(Arc::clone(&self.release)),
        }
    }
}

impl Default for PreviewFactory {
    fn default() -> Self {
        Self::new(
            |id, file| format!("preview://{}/{}", id, file.file_name),
            |_url| {},
        )
    }
}

impl fmt::Debug for PreviewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewFactory").finish_non_exhaustive()
    }
}

/// A preview URL that must be released when no longer shown.
pub struct PreviewHandle {
    url: String,
    release: Option<Arc<ReleasePreview>>,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Release the preview now. Idempotent; dropping the handle also
    /// releases it.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// Where a pending attachment currently lives.
#[derive(Debug)]
pub enum MediaSource {
    /// Already persisted on the platform (edit flow, or uploaded earlier).
    Persisted { media_id: String, url: String },

    /// Still local to this draft; uploads on submit.
    Local {
        file: SelectedFile,
        preview: PreviewHandle,
    },
}

/// One attachment within a draft.
#[derive(Debug)]
pub struct PendingMedia {
    local_id: LocalMediaId,
    kind: MediaKind,
    source: MediaSource,
}

impl PendingMedia {
    pub fn local_id(&self) -> LocalMediaId {
        self.local_id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.source, MediaSource::Persisted { .. })
    }

    /// URL to display for this attachment: the stored URL if persisted,
    /// the preview URL otherwise.
    pub fn display_url(&self) -> &str {
        match &self.source {
            MediaSource::Persisted { url, .. } => url,
            MediaSource::Local { preview, .. } => preview.url(),
        }
    }

    /// Platform media id, once the attachment is persisted.
    pub fn media_id(&self) -> Option<&str> {
        match &self.source {
            MediaSource::Persisted { media_id, .. } => Some(media_id),
            MediaSource::Local { .. } => None,
        }
    }
}

/// The ordered media attached to a draft.
///
/// The set itself does not enforce caps; that is the validation policy's
/// job at selection time. It does own the preview lifecycle: dropping a
/// local item releases its preview.
#[derive(Debug, Default)]
pub struct PendingMediaSet {
    items: Vec<PendingMedia>,
}

impl PendingMediaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the media already attached to a post (edit flow).
    pub fn from_persisted(media: &[Media]) -> Self {
        Self {
            items: media
                .iter()
                .map(|m| PendingMedia {
                    local_id: LocalMediaId::new(),
                    kind: m.kind,
                    source: MediaSource::Persisted {
                        media_id: m.id.clone(),
                        url: m.url.clone(),
                    },
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[PendingMedia] {
        &self.items
    }

    pub fn video_count(&self) -> usize {
        self.items.iter().filter(|m| m.kind.is_video()).count()
    }

    /// Append a policy-accepted local file.
    pub fn push_local(
        &mut self,
        local_id: LocalMediaId,
        kind: MediaKind,
        file: SelectedFile,
        preview: PreviewHandle,
    ) {
        self.items.push(PendingMedia {
            local_id,
            kind,
            source: MediaSource::Local { file, preview },
        });
    }

    /// Remove one attachment. Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: LocalMediaId) -> bool {
        match self.items.iter().position(|m| m.local_id == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Ids of attachments already persisted on the platform, in order.
    pub fn persisted_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|m| m.media_id().map(String::from))
            .collect()
    }

    /// Clones of the local files still awaiting upload, in display order.
    pub fn local_files(&self) -> Vec<(LocalMediaId, MediaKind, SelectedFile)> {
        self.items
            .iter()
            .filter_map(|m| match &m.source {
                MediaSource::Local { file, .. } => Some((m.local_id, m.kind, file.clone())),
                MediaSource::Persisted { .. } => None,
            })
            .collect()
    }

    /// Convert a local attachment into a persisted one after its upload.
    ///
    /// Replacing the source drops the old `Local` value, which releases
    /// the preview.
    pub fn mark_persisted(&mut self, id: LocalMediaId, media: &Media) {
        if let Some(item) = self.items.iter_mut().find(|m| m.local_id == id) {
            item.source = MediaSource::Persisted {
                media_id: media.id.clone(),
                url: media.url.clone(),
            };
        }
    }

    /// Drop every attachment, releasing local previews.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_factory() -> (PreviewFactory, Arc<AtomicUsize>) {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let factory = PreviewFactory::new(
            |id, file| format!("preview://{}/{}", id, file.file_name),
            move |_url| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        (factory, released)
    }

    fn jpeg(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/jpeg", &b"fake-jpeg"[..])
    }

    #[test]
    fn test_kind_from_content_type() {
        assert_eq!(
            MediaKind::from_content_type("image/png"),
            Some(MediaKind::Image)
        );
        assert_eq!(
            MediaKind::from_content_type("video/mp4"),
            Some(MediaKind::Video)
        );
        assert_eq!(MediaKind::from_content_type("application/pdf"), None);
    }

    #[test]
    fn test_remove_releases_preview_once() {
        let (factory, released) = counting_factory();
        let mut set = PendingMediaSet::new();

        let file = jpeg("a.jpg");
        let id = LocalMediaId::new();
        let preview = factory.preview(id, &file);
        set.push_local(id, MediaKind::Image, file, preview);

        assert!(set.remove(id));
        assert_eq!(released.load(Ordering::SeqCst), 1);
        assert!(!set.remove(id));
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mark_persisted_releases_preview() {
        let (factory, released) = counting_factory();
        let mut set = PendingMediaSet::new();

        let file = jpeg("a.jpg");
        let id = LocalMediaId::new();
        let preview = factory.preview(id, &file);
        set.push_local(id, MediaKind::Image, file, preview);

        let media = Media {
            id: "media-1".into(),
            kind: MediaKind::Image,
            url: "https://cdn.test/a.jpg".into(),
            related_post: "post-1".into(),
        };
        set.mark_persisted(id, &media);

        assert_eq!(released.load(Ordering::SeqCst), 1);
        assert_eq!(set.persisted_ids(), vec!["media-1".to_string()]);
        assert!(set.local_files().is_empty());
        assert_eq!(set.items()[0].display_url(), "https://cdn.test/a.jpg");
    }

    #[test]
    fn test_clear_releases_every_local_preview() {
        let (factory, released) = counting_factory();
        let mut set = PendingMediaSet::new();

        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            let file = jpeg(name);
            let id = LocalMediaId::new();
            let preview = factory.preview(id, &file);
            set.push_local(id, MediaKind::Image, file, preview);
        }

        set.clear();
        assert_eq!(released.load(Ordering::SeqCst), 3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_persisted_seeds_without_local_files() {
        let media = vec![
            Media {
                id: "media-1".into(),
                kind: MediaKind::Image,
                url: "https://cdn.test/a.jpg".into(),
                related_post: "post-1".into(),
            },
            Media {
                id: "media-2".into(),
                kind: MediaKind::Video,
                url: "https://cdn.test/b.mp4".into(),
                related_post: "post-1".into(),
            },
        ];

        let set = PendingMediaSet::from_persisted(&media);
        assert_eq!(set.len(), 2);
        assert_eq!(set.video_count(), 1);
        assert!(set.local_files().is_empty());
        assert_eq!(
            set.persisted_ids(),
            vec!["media-1".to_string(), "media-2".to_string()]
        );
    }
}
