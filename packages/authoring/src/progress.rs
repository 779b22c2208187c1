//! Per-attachment upload progress, keyed by stable local id.

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::traits::uploader::ProgressCallback;
use crate::types::media::LocalMediaId;

/// Tracks 0-100 upload progress for each local attachment.
///
/// Clones share state, so one tracker can live in the session while a UI
/// polls another handle. Entries are kept in insertion order. Percentages
/// are clamped to 100 and the last write wins.
#[derive(Clone, Debug, Default)]
pub struct UploadProgressTracker {
    progress: Arc<RwLock<IndexMap<LocalMediaId, u8>>>,
}

impl UploadProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attachment at 0% before its upload starts, so a bar
    /// can render immediately.
    pub fn begin(&self, id: LocalMediaId) {
        self.progress.write().unwrap().insert(id, 0);
    }

    /// Callback that records progress for one attachment.
    pub fn callback_for(&self, id: LocalMediaId) -> ProgressCallback {
        let progress = Arc::clone(&self.progress);
        Arc::new(move |percent: u8| {
            progress.write().unwrap().insert(id, percent.min(100));
        })
    }

    /// Current percentage for an attachment, if its upload has started.
    pub fn percent(&self, id: LocalMediaId) -> Option<u8> {
        self.progress.read().unwrap().get(&id).copied()
    }

    /// Copy of every tracked percentage, in insertion order.
    pub fn snapshot(&self) -> IndexMap<LocalMediaId, u8> {
        self.progress.read().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.read().unwrap().is_empty()
    }

    /// Forget all progress, at the start and end of a submit.
    pub fn clear(&self) {
        self.progress.write().unwrap().clear();
    }
}
