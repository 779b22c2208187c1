//! The authoring session - main entry point for the library.
//!
//! A session holds one draft (create or edit), its pending media, and the
//! collaborators needed to submit: a platform store, an upload service, a
//! metadata probe, and an identity source.

use tracing::{info, warn};

use crate::error::{SelectionResult, StoreResult, SubmitError, SubmitResult};
use crate::policy::MediaValidationPolicy;
use crate::progress::UploadProgressTracker;
use crate::traits::identity::Identity;
use crate::traits::probe::MediaProbe;
use crate::traits::store::PlatformStore;
use crate::traits::uploader::MediaUploader;
use crate::types::draft::PostDraft;
use crate::types::media::{LocalMediaId, PendingMediaSet, PreviewFactory, SelectedFile};
use crate::types::post::NewPost;
use crate::types::report::SubmitReport;
use crate::workflow::{delete_removed_media, removed_media_ids, upload_new_media, validate_draft};

/// Where a submit currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Nothing in flight.
    Idle,

    /// Checking the draft fields.
    Validating,

    /// Creating or updating the post record.
    Persisting,

    /// Deleting media removed during an edit.
    ReconcilingDeletes,

    /// Uploading new attachments and recording them.
    UploadingMedia,

    /// Submit finished; the post is saved. Attachment-level failures,
    /// if any, are in the report.
    Succeeded,

    /// Submit aborted before the post was saved.
    Failed,
}

impl SubmitPhase {
    /// Whether the submit has come to rest.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// One post being written or edited.
///
/// # Example
///
/// ```rust,ignore
/// let mut session = AuthoringSession::new(store, uploader, probe, identity);
///
/// session.set_title("Shakshuka for one");
/// session.set_description("Weeknight pan version.");
/// session.select_media(vec![photo]).await?;
///
/// let report = session.submit().await?;
/// assert!(report.is_clean());
/// ```
pub struct AuthoringSession<S, U, P, I>
where
    S: PlatformStore,
    U: MediaUploader,
    P: MediaProbe,
    I: Identity,
{
    store: S,
    uploader: U,
    probe: P,
    identity: I,
    policy: MediaValidationPolicy,
    previews: PreviewFactory,
    draft: PostDraft,
    media: PendingMediaSet,
    baseline_media: Vec<String>,
    progress: UploadProgressTracker,
    phase: SubmitPhase,
}

impl<S, U, P, I> AuthoringSession<S, U, P, I>
where
    S: PlatformStore,
    U: MediaUploader,
    P: MediaProbe,
    I: Identity,
{
    /// Start a session for a brand new post.
    pub fn new(store: S, uploader: U, probe: P, identity: I) -> Self {
        Self {
            store,
            uploader,
            probe,
            identity,
            policy: MediaValidationPolicy::default(),
            previews: PreviewFactory::default(),
            draft: PostDraft::new(),
            media: PendingMediaSet::new(),
            baseline_media: Vec::new(),
            progress: UploadProgressTracker::new(),
            phase: SubmitPhase::Idle,
        }
    }

    /// Start a session editing an existing post, loading its fields and
    /// current attachments.
    pub async fn edit(
        store: S,
        uploader: U,
        probe: P,
        identity: I,
        post_id: &str,
    ) -> StoreResult<Self> {
        let (post, media) =
            tokio::try_join!(store.get_post(post_id), store.media_by_post(post_id))?;
        info!(post_id = %post.id, media_count = media.len(), "Opened post for editing");

        let mut session = Self::new(store, uploader, probe, identity);
        session.draft = PostDraft::for_post(&post);
        session.baseline_media = media.iter().map(|m| m.id.clone()).collect();
        session.media = PendingMediaSet::from_persisted(&media);
        Ok(session)
    }

    /// Use non-default validation caps.
    pub fn with_policy(mut self, policy: MediaValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a preview factory wired to the UI's object URLs.
    pub fn with_previews(mut self, previews: PreviewFactory) -> Self {
        self.previews = previews;
        self
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn media(&self) -> &PendingMediaSet {
        &self.media
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Progress tracker for the in-flight submit. Clone it to poll from
    /// elsewhere; clones share state.
    pub fn progress(&self) -> &UploadProgressTracker {
        &self.progress
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.touch();
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.touch();
        self.draft.description = description.into();
    }

    // A terminal phase rolls back to Idle on the next edit gesture.
    fn touch(&mut self) {
        if self.phase.is_terminal() {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Attach files to the draft, enforcing the media caps.
    ///
    /// All-or-nothing: one offending file rejects the whole batch and
    /// changes nothing.
    pub async fn select_media(&mut self, files: Vec<SelectedFile>) -> SelectionResult<()> {
        self.touch();
        let accepted = self
            .policy
            .check_selection(&self.probe, &self.media, &files)
            .await?;
        for item in accepted {
            let local_id = LocalMediaId::new();
            let preview = self.previews.preview(local_id, &item.file);
            self.media.push_local(local_id, item.kind, item.file, preview);
        }
        Ok(())
    }

    /// Detach one item. A local file's preview is released immediately;
    /// persisted media is deleted from the platform at the next submit.
    pub fn remove_media(&mut self, id: LocalMediaId) -> bool {
        self.touch();
        self.media.remove(id)
    }

    /// Run the submit: validate, persist the post, reconcile removed
    /// media, upload new media.
    ///
    /// Fails outright only when validation or persisting the post fails.
    /// After that point the post exists and per-attachment problems are
    /// reported, not raised; the form is kept so the user can retry them.
    pub async fn submit(&mut self) -> SubmitResult<SubmitReport> {
        self.progress.clear();

        self.phase = SubmitPhase::Validating;
        if let Err(issue) = validate_draft(&self.draft, &self.media) {
            self.phase = SubmitPhase::Failed;
            return Err(SubmitError::Validation(issue));
        }

        self.phase = SubmitPhase::Persisting;
        let fields = NewPost {
            title: self.draft.title.trim().to_string(),
            description: self.draft.description.trim().to_string(),
            created_by: self.identity.current_user(),
        };
        let persisted = match &self.draft.existing_id {
            Some(id) => self.store.update_post(id, &fields).await,
            None => self.store.create_post(&fields).await,
        };
        let post = match persisted {
            Ok(post) => post,
            Err(error) => {
                warn!(error = %error, "Failed to persist post");
                self.phase = SubmitPhase::Failed;
                return Err(SubmitError::Persist(error));
            }
        };
        // The post exists now. Keep its id so a retry after a partial
        // failure updates this post instead of creating a duplicate.
        self.draft.existing_id = Some(post.id.clone());

        self.phase = SubmitPhase::ReconcilingDeletes;
        let removed = removed_media_ids(&self.baseline_media, &self.media);
        let failed_deletes = delete_removed_media(&self.store, &removed).await;

        self.phase = SubmitPhase::UploadingMedia;
        let pending = self.media.local_files();
        let (created, failed_uploads) = upload_new_media(
            &self.store,
            &self.uploader,
            &post.id,
            pending,
            &self.progress,
        )
        .await;

        let mut created_media = Vec::with_capacity(created.len());
        for (local_id, media) in created {
            self.media.mark_persisted(local_id, &media);
            created_media.push(media);
        }

        // New baseline: what is on the platform now. Records that failed
        // to delete are still out there, so they stay eligible for the
        // next attempt.
        self.baseline_media = self.media.persisted_ids();
        self.baseline_media
            .extend(failed_deletes.iter().map(|f| f.media_id.clone()));

        self.progress.clear();

        let report = SubmitReport {
            post,
            created_media,
            failed_uploads,
            failed_deletes,
        };
        info!(
            post_id = %report.post.id,
            created = report.created_media.len(),
            failed_uploads = report.failed_uploads.len(),
            failed_deletes = report.failed_deletes.len(),
            "Submit finished"
        );

        if report.is_clean() {
            self.reset();
        }
        self.phase = SubmitPhase::Succeeded;
        Ok(report)
    }

    /// Clear the form: blank draft, no attachments, previews released.
    pub fn reset(&mut self) {
        self.draft = PostDraft::new();
        self.media.clear();
        self.baseline_media.clear();
        self.progress.clear();
        self.phase = SubmitPhase::Idle;
    }
}
