//! Typed errors for the authoring library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while choosing files to attach.
///
/// Selection is all-or-nothing: one offending file rejects the whole
/// batch and leaves the already-attached media untouched.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// File is neither an image nor a video
    #[error("only image and video files are allowed: {name}")]
    UnsupportedFileType { name: String, content_type: String },

    /// Accepting the batch would exceed the attachment cap
    #[error("maximum {limit} media files allowed")]
    TooManyItems { limit: usize },

    /// Accepting the batch would exceed the video cap
    #[error("at most {limit} video(s) allowed per post")]
    TooManyVideos { limit: usize },

    /// Video runs longer than the policy allows
    #[error(
        "video must not exceed {} seconds: {name} is {} seconds",
        .limit.as_secs(),
        .duration.as_secs()
    )]
    VideoTooLong {
        name: String,
        duration: Duration,
        limit: Duration,
    },

    /// Video metadata could not be read, so the duration is unknown
    #[error("could not read video metadata for {name}")]
    ProbeFailed {
        name: String,
        #[source]
        source: ProbeError,
    },
}

/// A draft field that fails pre-submit validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("title is required")]
    TitleRequired,

    #[error("description is required")]
    DescriptionRequired,

    #[error("at least one photo or video is required")]
    MediaRequired,
}

/// Errors that abort a submit before anything is persisted.
///
/// Per-attachment failures after the post itself is saved do not abort
/// the submit; they are collected into the [`SubmitReport`] instead.
///
/// [`SubmitReport`]: crate::types::report::SubmitReport
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Draft failed validation; nothing was sent anywhere
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationIssue),

    /// Creating or updating the post record failed
    #[error("failed to save post: {0}")]
    Persist(#[source] StoreError),
}

/// Errors from a post or media store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage operation failed
    #[error("storage error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Record not found
    #[error("not found: {id}")]
    NotFound { id: String },
}

/// Errors from the binary upload service.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Transfer failed (connection, timeout)
    #[error("upload transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service refused the file
    #[error("upload rejected: {0}")]
    Rejected(String),
}

/// Errors from media metadata probes.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Metadata could not be decoded from the file
    #[error("could not read media metadata: {0}")]
    Unreadable(String),
}

/// Why one attachment failed while the rest of the submit went through.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The file never made it to storage
    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),

    /// The file uploaded but its media record could not be created
    #[error("media record failed: {0}")]
    Record(#[from] StoreError),
}

/// Result type alias for selection checks.
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;

/// Result type alias for submit operations.
pub type SubmitResult<T> = std::result::Result<T, SubmitError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for upload operations.
pub type UploadResult<T> = std::result::Result<T, UploadError>;

/// Result type alias for probe operations.
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;
