//! Submit steps: validate, reconcile removed media, upload new media.

use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::{AttachmentError, ValidationIssue};
use crate::progress::UploadProgressTracker;
use crate::traits::store::MediaStore;
use crate::traits::uploader::{MediaUploader, ProgressCallback};
use crate::types::draft::PostDraft;
use crate::types::media::{LocalMediaId, MediaKind, PendingMediaSet, SelectedFile};
use crate::types::post::{Media, NewMedia};
use crate::types::report::{FailedDelete, FailedUpload};

/// Check a draft is submittable. Title, description, and at least one
/// attachment are required; whitespace does not count.
pub fn validate_draft(
    draft: &PostDraft,
    media: &PendingMediaSet,
) -> Result<(), ValidationIssue> {
    if draft.title.trim().is_empty() {
        return Err(ValidationIssue::TitleRequired);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationIssue::DescriptionRequired);
    }
    if media.is_empty() {
        return Err(ValidationIssue::MediaRequired);
    }
    Ok(())
}

/// Media ids that were on the post when editing began but are no longer
/// attached, preserving baseline order.
pub fn removed_media_ids(baseline: &[String], media: &PendingMediaSet) -> Vec<String> {
    let kept: HashSet<String> = media.persisted_ids().into_iter().collect();
    baseline
        .iter()
        .filter(|id| !kept.contains(*id))
        .cloned()
        .collect()
}

/// Delete removed media records, best-effort and concurrently.
///
/// Failures are collected, not propagated: a record that refuses to die
/// should not cost the user their post.
pub async fn delete_removed_media<S: MediaStore>(
    store: &S,
    removed: &[String],
) -> Vec<FailedDelete> {
    let deletions = removed.iter().map(|media_id| async move {
        match store.delete_media(media_id).await {
            Ok(_) => {
                debug!(media_id = %media_id, "Deleted removed media record");
                None
            }
            Err(error) => {
                warn!(media_id = %media_id, error = %error, "Failed to delete removed media record");
                Some(FailedDelete {
                    media_id: media_id.clone(),
                    error,
                })
            }
        }
    });

    join_all(deletions).await.into_iter().flatten().collect()
}

/// Upload local files and create their media records, concurrently.
///
/// Every file is attempted regardless of how its siblings fare. Results
/// come back in selection order because `join_all` preserves input order.
pub async fn upload_new_media<S, U>(
    store: &S,
    uploader: &U,
    post_id: &str,
    files: Vec<(LocalMediaId, MediaKind, SelectedFile)>,
    progress: &UploadProgressTracker,
) -> (Vec<(LocalMediaId, Media)>, Vec<FailedUpload>)
where
    S: MediaStore,
    U: MediaUploader,
{
    for (local_id, _, _) in &files {
        progress.begin(*local_id);
    }

    let uploads = files.into_iter().map(|(local_id, kind, file)| {
        let on_progress = progress.callback_for(local_id);
        let file_name = file.file_name.clone();
        async move {
            let outcome = attach_one(store, uploader, post_id, kind, &file, on_progress).await;
            (local_id, file_name, outcome)
        }
    });

    let mut created = Vec::new();
    let mut failed = Vec::new();
    for (local_id, file_name, outcome) in join_all(uploads).await {
        match outcome {
            Ok(media) => {
                debug!(file_name = %file_name, media_id = %media.id, "Attached media");
                created.push((local_id, media));
            }
            Err(error) => {
                warn!(file_name = %file_name, error = %error, "Failed to attach media");
                failed.push(FailedUpload {
                    local_id,
                    file_name,
                    error,
                });
            }
        }
    }
    (created, failed)
}

/// Upload one file and create its media record.
async fn attach_one<S, U>(
    store: &S,
    uploader: &U,
    post_id: &str,
    kind: MediaKind,
    file: &SelectedFile,
    on_progress: ProgressCallback,
) -> Result<Media, AttachmentError>
where
    S: MediaStore,
    U: MediaUploader,
{
    let url = uploader.upload(file, post_id, on_progress).await?;
    let media = store
        .create_media(&NewMedia {
            kind,
            url,
            related_post: post_id.to_string(),
        })
        .await?;
    Ok(media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::media::{LocalMediaId, PreviewFactory};

    fn draft(title: &str, description: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            description: description.into(),
            existing_id: None,
        }
    }

    fn set_with_one_image() -> PendingMediaSet {
        let factory = PreviewFactory::default();
        let mut set = PendingMediaSet::new();
        let file = SelectedFile::new("a.jpg", "image/jpeg", &b"fake"[..]);
        let id = LocalMediaId::new();
        let preview = factory.preview(id, &file);
        set.push_local(id, MediaKind::Image, file, preview);
        set
    }

    #[test]
    fn test_validate_requires_title() {
        let err = validate_draft(&draft("   ", "desc"), &set_with_one_image()).unwrap_err();
        assert_eq!(err, ValidationIssue::TitleRequired);
    }

    #[test]
    fn test_validate_requires_description() {
        let err = validate_draft(&draft("title", ""), &set_with_one_image()).unwrap_err();
        assert_eq!(err, ValidationIssue::DescriptionRequired);
    }

    #[test]
    fn test_validate_requires_media() {
        let err = validate_draft(&draft("title", "desc"), &PendingMediaSet::new()).unwrap_err();
        assert_eq!(err, ValidationIssue::MediaRequired);
    }

    #[test]
    fn test_validate_passes_complete_draft() {
        assert!(validate_draft(&draft("title", "desc"), &set_with_one_image()).is_ok());
    }

    #[test]
    fn test_removed_ids_diff_against_baseline() {
        let baseline = vec!["media-1".to_string(), "media-2".to_string()];
        // Current set kept nothing from the baseline.
        let set = PendingMediaSet::new();
        assert_eq!(removed_media_ids(&baseline, &set), baseline);

        let media = crate::types::post::Media {
            id: "media-2".into(),
            kind: MediaKind::Image,
            url: "https://cdn.test/b.jpg".into(),
            related_post: "post-1".into(),
        };
        let set = PendingMediaSet::from_persisted(std::slice::from_ref(&media));
        assert_eq!(removed_media_ids(&baseline, &set), vec!["media-1".to_string()]);
    }
}
