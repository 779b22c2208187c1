//! The outcome of a submit.

use crate::error::{AttachmentError, StoreError};
use crate::types::media::LocalMediaId;
use crate::types::post::{Media, Post};

/// An attachment that did not make it during submit.
#[derive(Debug)]
pub struct FailedUpload {
    pub local_id: LocalMediaId,
    pub file_name: String,
    pub error: AttachmentError,
}

/// A removed media record the platform refused to delete.
#[derive(Debug)]
pub struct FailedDelete {
    pub media_id: String,
    pub error: StoreError,
}

/// What a submit actually accomplished.
///
/// The post itself saving is the success criterion; attachment work after
/// that is best-effort and failures land here rather than aborting. A
/// report with failures means the form was kept intact so the user can
/// retry just the failed parts.
#[derive(Debug)]
pub struct SubmitReport {
    /// The post as persisted (created or updated).
    pub post: Post,

    /// Media records created this submit, in selection order.
    pub created_media: Vec<Media>,

    /// Attachments that failed to upload or record.
    pub failed_uploads: Vec<FailedUpload>,

    /// Removed media that failed to delete.
    pub failed_deletes: Vec<FailedDelete>,
}

impl SubmitReport {
    /// Whether every attachment and deletion went through.
    pub fn is_clean(&self) -> bool {
        self.failed_uploads.is_empty() && self.failed_deletes.is_empty()
    }

    /// One-line human summary, toast-sized.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "post saved".to_string();
        }
        let mut parts = vec!["post saved".to_string()];
        if !self.failed_uploads.is_empty() {
            parts.push(format!(
                "{} media item(s) failed to upload",
                self.failed_uploads.len()
            ));
        }
        if !self.failed_deletes.is_empty() {
            parts.push(format!(
                "{} removed item(s) failed to delete",
                self.failed_deletes.len()
            ));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use chrono::Utc;

    fn saved_post() -> Post {
        Post {
            id: "post-1".into(),
            title: "Focaccia".into(),
            description: "Day two dough".into(),
            created_by: Some("user-1".into()),
            created_at: Utc::now(),
            like_count: 0,
        }
    }

    #[test]
    fn test_clean_report_summary() {
        let report = SubmitReport {
            post: saved_post(),
            created_media: vec![],
            failed_uploads: vec![],
            failed_deletes: vec![],
        };
        assert!(report.is_clean());
        assert_eq!(report.summary(), "post saved");
    }

    #[test]
    fn test_dirty_report_summary_counts_failures() {
        let report = SubmitReport {
            post: saved_post(),
            created_media: vec![],
            failed_uploads: vec![FailedUpload {
                local_id: LocalMediaId::new(),
                file_name: "b.mp4".into(),
                error: UploadError::Rejected("too large".into()).into(),
            }],
            failed_deletes: vec![],
        };
        assert!(!report.is_clean());
        assert_eq!(report.summary(), "post saved, 1 media item(s) failed to upload");
    }
}
