//! Post Authoring Workflow Library
//!
//! Drives the compose-and-edit flow for cooking posts: draft fields,
//! media selection with policy checks, local preview lifecycle, and a
//! submit pipeline that persists the post, reconciles removed media,
//! and uploads new attachments with per-file progress.
//!
//! # Design
//!
//! - The post record is saved first; attachment failures afterwards are
//!   reported, they never take the whole submit down
//! - Media selection is checked up front, so a file that can never be
//!   accepted is rejected before it reaches the form
//! - A failed submit keeps the draft and its attachments so the user
//!   can retry, and a retry after a partial save updates the already
//!   created post instead of duplicating it
//! - Backends sit behind traits; the library handles the workflow, the
//!   application supplies transport
//!
//! # Usage
//!
//! ```rust,ignore
//! use authoring::testing::{image_file, TestScenario};
//!
//! let scenario = TestScenario::new();
//! let mut session = scenario.session();
//!
//! session.set_title("Weeknight shakshuka");
//! session.set_description("One pan, twenty minutes.");
//! session.select_media(vec![image_file("pan.jpg")]).await?;
//!
//! let report = session.submit().await?;
//! println!("{}", report.summary());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (stores, uploader, probe, identity)
//! - [`types`] - Draft, pending media, and submit report types
//! - [`policy`] - Media selection rules (item caps, video duration)
//! - [`progress`] - Per-file upload progress tracking
//! - [`workflow`] - The submit pipeline, broken into testable steps
//! - [`session`] - Stateful authoring session tying it all together
//! - [`stores`] - Storage implementations (MemoryStore, etc.)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod policy;
pub mod progress;
pub mod session;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;
pub mod workflow;

#[cfg(feature = "skillet")]
pub mod remote;

// Re-export core types at crate root
pub use error::{
    AttachmentError, ProbeError, SelectionError, StoreError, SubmitError, UploadError,
    ValidationIssue,
};
pub use traits::{
    identity::{FixedIdentity, Identity},
    probe::{MediaProbe, StaticProbe},
    store::{MediaStore, PlatformStore, PostStore},
    uploader::{MediaUploader, ProgressCallback},
};
pub use types::{
    draft::PostDraft,
    media::{
        LocalMediaId, MediaKind, MediaSource, PendingMedia, PendingMediaSet, PreviewFactory,
        PreviewHandle, SelectedFile,
    },
    post::{Media, NewMedia, NewPost, Post},
    report::{FailedDelete, FailedUpload, SubmitReport},
};

// Re-export the session
pub use session::{AuthoringSession, SubmitPhase};

// Re-export the selection policy and its default caps
pub use policy::{
    AcceptedFile, MediaValidationPolicy, MAX_MEDIA_ITEMS, MAX_VIDEOS, MAX_VIDEO_DURATION,
};

// Re-export progress tracking
pub use progress::UploadProgressTracker;

// Re-export workflow steps
pub use workflow::{delete_removed_media, removed_media_ids, upload_new_media, validate_draft};

// Re-export stores
pub use stores::MemoryStore;

#[cfg(feature = "skillet")]
pub use remote::{ClientIdentity, RemoteStore, RemoteUploader};

// Re-export testing utilities
pub use testing::{MockUploader, RecordingStore, StoreCall, TestScenario};
