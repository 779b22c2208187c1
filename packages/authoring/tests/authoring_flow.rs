//! Integration tests for the authoring workflow.
//!
//! These drive full sessions end to end:
//! 1. Compose a new post with attachments
//! 2. Edit an existing post, removing and adding media
//! 3. Partial failures: uploads, deletes, and retries
//! 4. Form lifecycle: validation, reset, preview release

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use authoring::testing::{image_file, video_file, MockUploader, RecordingStore, StoreCall, TestScenario};
use authoring::{
    FixedIdentity, Media, MediaKind, Post, PreviewFactory, SelectionError, StaticProbe,
    SubmitError, SubmitPhase, ValidationIssue,
};

/// Helper to build a seeded post record.
fn seeded_post(id: &str, title: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        created_by: Some("user-1".to_string()),
        created_at: Utc::now(),
        like_count: 0,
    }
}

/// Helper to build a seeded media record.
fn seeded_media(id: &str, post_id: &str, url: &str) -> Media {
    Media {
        id: id.to_string(),
        kind: MediaKind::Image,
        url: url.to_string(),
        related_post: post_id.to_string(),
    }
}

#[tokio::test]
async fn test_create_post_with_images() {
    let scenario = TestScenario::new();
    let mut session = scenario.session();

    session.set_title("Weeknight shakshuka");
    session.set_description("One pan, twenty minutes.");
    session
        .select_media(vec![image_file("a.jpg"), image_file("b.jpg")])
        .await
        .unwrap();

    let report = session.submit().await.unwrap();

    assert!(report.is_clean());
    assert_eq!(report.post.title, "Weeknight shakshuka");
    assert_eq!(report.created_media.len(), 2);
    // Attachments land in selection order.
    assert_eq!(report.created_media[0].url, "https://cdn.test/a.jpg");
    assert_eq!(report.created_media[1].url, "https://cdn.test/b.jpg");

    // The post is created first, then one media record per upload.
    assert_eq!(
        scenario.store.calls(),
        vec![
            StoreCall::CreatePost {
                title: "Weeknight shakshuka".to_string()
            },
            StoreCall::CreateMedia {
                related_post: report.post.id.clone(),
                url: "https://cdn.test/a.jpg".to_string()
            },
            StoreCall::CreateMedia {
                related_post: report.post.id.clone(),
                url: "https://cdn.test/b.jpg".to_string()
            },
        ]
    );

    // Clean submit resets the form.
    assert_eq!(session.phase(), SubmitPhase::Succeeded);
    assert!(session.draft().title.is_empty());
    assert!(session.media().is_empty());
    assert!(session.progress().is_empty());
    assert_eq!(scenario.store.data().post_count(), 1);
    assert_eq!(scenario.store.data().media_count(), 2);
}

#[tokio::test]
async fn test_edit_deletes_removed_media() {
    let store = RecordingStore::new()
        .with_post(seeded_post("post-a", "Focaccia"))
        .with_media(seeded_media("m-1", "post-a", "https://cdn.test/old-1.jpg"))
        .with_media(seeded_media("m-2", "post-a", "https://cdn.test/old-2.jpg"));
    let scenario = TestScenario::new().with_store(store);

    let mut session = scenario.edit_session("post-a").await.unwrap();
    scenario.store.clear_calls();

    assert!(session.draft().is_edit());
    assert_eq!(session.media().len(), 2);

    let target = session
        .media()
        .items()
        .iter()
        .find(|m| m.media_id() == Some("m-1"))
        .map(|m| m.local_id())
        .unwrap();
    assert!(session.remove_media(target));

    let report = session.submit().await.unwrap();

    assert!(report.is_clean());
    assert_eq!(
        scenario.store.calls(),
        vec![
            StoreCall::UpdatePost {
                id: "post-a".to_string()
            },
            StoreCall::DeleteMedia {
                id: "m-1".to_string()
            },
        ]
    );
    assert_eq!(scenario.store.data().media_count(), 1);
}

#[tokio::test]
async fn test_empty_title_fails_validation_without_store_calls() {
    let scenario = TestScenario::new();
    let mut session = scenario.session();

    session.set_title("   ");
    session.set_description("Plenty of detail.");
    session.select_media(vec![image_file("a.jpg")]).await.unwrap();

    let err = session.submit().await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Validation(ValidationIssue::TitleRequired)
    ));
    assert_eq!(scenario.store.call_count(), 0);
    assert_eq!(scenario.uploader.upload_count(), 0);
    assert_eq!(session.phase(), SubmitPhase::Failed);
    // The form survives so the user can fix the field.
    assert_eq!(session.media().len(), 1);
}

#[tokio::test]
async fn test_missing_media_fails_validation() {
    let scenario = TestScenario::new();
    let mut session = scenario.session();

    session.set_title("Granola");
    session.set_description("Crunchy.");

    let err = session.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Validation(ValidationIssue::MediaRequired)
    ));
    assert_eq!(scenario.store.call_count(), 0);
}

#[tokio::test]
async fn test_failed_upload_keeps_form_and_reports() {
    let uploader = MockUploader::new().failing_on("b.jpg");
    let scenario = TestScenario::new().with_uploader(uploader);
    let mut session = scenario.session();

    session.set_title("Dumplings");
    session.set_description("Steamed, then fried.");
    session
        .select_media(vec![image_file("a.jpg"), image_file("b.jpg"), image_file("c.jpg")])
        .await
        .unwrap();

    let report = session.submit().await.unwrap();

    // The post saved; the one bad upload is reported, the rest landed.
    assert!(!report.is_clean());
    assert_eq!(report.created_media.len(), 2);
    assert_eq!(report.failed_uploads.len(), 1);
    assert_eq!(report.failed_uploads[0].file_name, "b.jpg");
    assert_eq!(
        scenario.uploader.uploaded_files(),
        vec!["a.jpg", "b.jpg", "c.jpg"],
        "a failure must not stop the remaining uploads"
    );

    // Form kept for retry, pointing at the saved post.
    assert_eq!(session.phase(), SubmitPhase::Succeeded);
    assert_eq!(session.media().len(), 3);
    assert_eq!(session.draft().existing_id.as_deref(), Some(report.post.id.as_str()));
    assert!(session.progress().is_empty());

    // Retry: updates the same post and re-uploads only the failed file.
    let retry = session.submit().await.unwrap();
    assert_eq!(retry.post.id, report.post.id);
    assert_eq!(
        scenario.uploader.uploaded_files(),
        vec!["a.jpg", "b.jpg", "c.jpg", "b.jpg"]
    );

    let calls = scenario.store.calls();
    let creates = calls
        .iter()
        .filter(|c| matches!(c, StoreCall::CreatePost { .. }))
        .count();
    let updates = calls
        .iter()
        .filter(|c| matches!(c, StoreCall::UpdatePost { .. }))
        .count();
    assert_eq!(creates, 1, "retry must not duplicate the post");
    assert_eq!(updates, 1);
}

#[tokio::test]
async fn test_persist_failure_aborts_submit() {
    let store = RecordingStore::new().failing_create_post();
    let scenario = TestScenario::new().with_store(store);
    let mut session = scenario.session();

    session.set_title("Pho");
    session.set_description("Broth first.");
    session.select_media(vec![image_file("a.jpg")]).await.unwrap();

    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Persist(_)));
    assert_eq!(session.phase(), SubmitPhase::Failed);
    // Nothing was uploaded and the form survives.
    assert_eq!(scenario.uploader.upload_count(), 0);
    assert_eq!(session.media().len(), 1);
    assert!(!session.draft().is_edit());
}

#[tokio::test]
async fn test_overlong_video_rejected_at_selection() {
    let probe = StaticProbe::new().with_duration("clip.mp4", Duration::from_secs(45));
    let scenario = TestScenario::new().with_probe(probe);
    let mut session = scenario.session();

    session.select_media(vec![image_file("a.jpg")]).await.unwrap();

    let err = session
        .select_media(vec![video_file("clip.mp4")])
        .await
        .unwrap_err();
    assert!(matches!(err, SelectionError::VideoTooLong { ref name, .. } if name == "clip.mp4"));

    // The rejected batch leaves existing attachments alone.
    assert_eq!(session.media().len(), 1);
}

#[tokio::test]
async fn test_media_cap_counts_seeded_attachments() {
    let store = RecordingStore::new()
        .with_post(seeded_post("post-a", "Ramen"))
        .with_media(seeded_media("m-1", "post-a", "https://cdn.test/old-1.jpg"))
        .with_media(seeded_media("m-2", "post-a", "https://cdn.test/old-2.jpg"));
    let scenario = TestScenario::new().with_store(store);

    let mut session = scenario.edit_session("post-a").await.unwrap();

    let err = session
        .select_media(vec![image_file("new-1.jpg"), image_file("new-2.jpg")])
        .await
        .unwrap_err();
    assert!(matches!(err, SelectionError::TooManyItems { limit: 3 }));
    assert_eq!(session.media().len(), 2);
}

#[tokio::test]
async fn test_failed_delete_retried_on_next_submit() {
    let store = RecordingStore::new()
        .with_post(seeded_post("post-a", "Paella"))
        .with_media(seeded_media("m-1", "post-a", "https://cdn.test/old-1.jpg"))
        .with_media(seeded_media("m-2", "post-a", "https://cdn.test/old-2.jpg"))
        .failing_delete_media("m-1");
    let scenario = TestScenario::new().with_store(store);

    let mut session = scenario.edit_session("post-a").await.unwrap();
    let target = session
        .media()
        .items()
        .iter()
        .find(|m| m.media_id() == Some("m-1"))
        .map(|m| m.local_id())
        .unwrap();
    session.remove_media(target);

    let report = session.submit().await.unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.failed_deletes.len(), 1);
    assert_eq!(report.failed_deletes[0].media_id, "m-1");
    assert_eq!(session.phase(), SubmitPhase::Succeeded);

    // The record is still out there; the next submit tries again.
    session.submit().await.unwrap();
    let delete_attempts = scenario
        .store
        .calls()
        .iter()
        .filter(|c| matches!(c, StoreCall::DeleteMedia { id } if id == "m-1"))
        .count();
    assert_eq!(delete_attempts, 2);
}

#[tokio::test]
async fn test_author_stamping() {
    let scenario = TestScenario::new().with_identity(FixedIdentity::user("chef-7"));
    let mut session = scenario.session();
    session.set_title("Tart");
    session.set_description("Lemon.");
    session.select_media(vec![image_file("a.jpg")]).await.unwrap();
    let report = session.submit().await.unwrap();
    assert_eq!(report.post.created_by.as_deref(), Some("chef-7"));

    let scenario = TestScenario::new().with_identity(FixedIdentity::anonymous());
    let mut session = scenario.session();
    session.set_title("Tart");
    session.set_description("Lemon.");
    session.select_media(vec![image_file("a.jpg")]).await.unwrap();
    let report = session.submit().await.unwrap();
    assert_eq!(report.post.created_by, None);
}

#[tokio::test]
async fn test_preview_urls_released_exactly_once() {
    let released = Arc::new(AtomicUsize::new(0));
    let counter = released.clone();
    let previews = PreviewFactory::new(
        |id, file| format!("blob:{}/{}", id, file.file_name),
        move |_url| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    let scenario = TestScenario::new();
    let mut session = scenario.session().with_previews(previews);

    session.set_title("Bagels");
    session.set_description("Boil then bake.");
    session
        .select_media(vec![image_file("a.jpg"), image_file("b.jpg")])
        .await
        .unwrap();
    assert!(session.media().items()[0].display_url().starts_with("blob:"));

    // Removing one attachment releases its preview.
    let first = session.media().items()[0].local_id();
    session.remove_media(first);
    assert_eq!(released.load(Ordering::SeqCst), 1);

    // Submitting persists the other; its preview is released too.
    let report = session.submit().await.unwrap();
    assert!(report.is_clean());
    assert_eq!(released.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_clean_submit_resets_and_next_gesture_idles() {
    let scenario = TestScenario::new();
    let mut session = scenario.session();

    session.set_title("Soup");
    session.set_description("From scratch.");
    session.select_media(vec![image_file("a.jpg")]).await.unwrap();
    session.submit().await.unwrap();

    assert_eq!(session.phase(), SubmitPhase::Succeeded);
    assert!(session.draft().title.is_empty());
    assert!(session.media().is_empty());

    // The next edit gesture leaves the terminal phase.
    session.set_title("Stew");
    assert_eq!(session.phase(), SubmitPhase::Idle);
}
