//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that drive the authoring
//! workflow without a real backend or upload service. The mocks record
//! their calls; clones share state, so keep one handle outside the
//! session to assert on afterwards.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{StoreError, StoreResult, UploadError, UploadResult};
use crate::session::AuthoringSession;
use crate::stores::MemoryStore;
use crate::traits::identity::FixedIdentity;
use crate::traits::probe::StaticProbe;
use crate::traits::store::{MediaStore, PostStore};
use crate::traits::uploader::{MediaUploader, ProgressCallback};
use crate::types::media::SelectedFile;
use crate::types::post::{Media, NewMedia, NewPost, Post};

/// A small fake image file.
pub fn image_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/jpeg", &b"fake-jpeg-bytes"[..])
}

/// A small fake video file.
pub fn video_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, "video/mp4", &b"fake-mp4-bytes"[..])
}

/// Record of a call made to the recording store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreatePost { title: String },
    UpdatePost { id: String },
    DeletePost { id: String },
    GetPost { id: String },
    AllPosts,
    PostsByUser { user_id: String },
    LikePost { id: String },
    UnlikePost { id: String },
    CreateMedia { related_post: String, url: String },
    DeleteMedia { id: String },
    MediaByPost { post_id: String },
}

fn injected(what: &str) -> StoreError {
    StoreError::Backend(format!("injected failure: {}", what).into())
}

/// A [`MemoryStore`] wrapper that records every call and can be told to
/// fail specific operations.
///
/// Clones share the underlying data, the call log, and the failure
/// configuration.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: Arc<MemoryStore>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    fail_create_post: bool,
    fail_update_post: bool,
    /// Substrings matched against the url of media being created.
    fail_create_media: HashSet<String>,
    /// Media ids whose deletion fails.
    fail_delete_media: HashSet<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing post.
    pub fn with_post(self, post: Post) -> Self {
        self.inner.insert_post(post);
        self
    }

    /// Seed an existing media record.
    pub fn with_media(self, media: Media) -> Self {
        self.inner.insert_media(media);
        self
    }

    /// Make `create_post` fail.
    pub fn failing_create_post(mut self) -> Self {
        self.fail_create_post = true;
        self
    }

    /// Make `update_post` fail.
    pub fn failing_update_post(mut self) -> Self {
        self.fail_update_post = true;
        self
    }

    /// Make `create_media` fail for any url containing `fragment`.
    pub fn failing_create_media(mut self, fragment: impl Into<String>) -> Self {
        self.fail_create_media.insert(fragment.into());
        self
    }

    /// Make `delete_media` fail for one media id.
    pub fn failing_delete_media(mut self, media_id: impl Into<String>) -> Self {
        self.fail_delete_media.insert(media_id.into());
        self
    }

    /// The underlying data, for direct assertions.
    pub fn data(&self) -> &MemoryStore {
        &self.inner
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Forget recorded calls (not data), e.g. after session setup.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, call: StoreCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl PostStore for RecordingStore {
    async fn create_post(&self, post: &NewPost) -> StoreResult<Post> {
        self.record(StoreCall::CreatePost {
            title: post.title.clone(),
        });
        if self.fail_create_post {
            return Err(injected("create_post"));
        }
        self.inner.create_post(post).await
    }

    async fn update_post(&self, id: &str, post: &NewPost) -> StoreResult<Post> {
        self.record(StoreCall::UpdatePost { id: id.to_string() });
        if self.fail_update_post {
            return Err(injected("update_post"));
        }
        self.inner.update_post(id, post).await
    }

    async fn delete_post(&self, id: &str) -> StoreResult<bool> {
        self.record(StoreCall::DeletePost { id: id.to_string() });
        self.inner.delete_post(id).await
    }

    async fn get_post(&self, id: &str) -> StoreResult<Post> {
        self.record(StoreCall::GetPost { id: id.to_string() });
        self.inner.get_post(id).await
    }

    async fn all_posts(&self) -> StoreResult<Vec<Post>> {
        self.record(StoreCall::AllPosts);
        self.inner.all_posts().await
    }

    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>> {
        self.record(StoreCall::PostsByUser {
            user_id: user_id.to_string(),
        });
        self.inner.posts_by_user(user_id).await
    }

    async fn like_post(&self, id: &str) -> StoreResult<Post> {
        self.record(StoreCall::LikePost { id: id.to_string() });
        self.inner.like_post(id).await
    }

    async fn unlike_post(&self, id: &str) -> StoreResult<Post> {
        self.record(StoreCall::UnlikePost { id: id.to_string() });
        self.inner.unlike_post(id).await
    }
}

#[async_trait]
impl MediaStore for RecordingStore {
    async fn create_media(&self, media: &NewMedia) -> StoreResult<Media> {
        self.record(StoreCall::CreateMedia {
            related_post: media.related_post.clone(),
            url: media.url.clone(),
        });
        if self
            .fail_create_media
            .iter()
            .any(|fragment| media.url.contains(fragment.as_str()))
        {
            return Err(injected("create_media"));
        }
        self.inner.create_media(media).await
    }

    async fn delete_media(&self, id: &str) -> StoreResult<bool> {
        self.record(StoreCall::DeleteMedia { id: id.to_string() });
        if self.fail_delete_media.contains(id) {
            return Err(injected("delete_media"));
        }
        self.inner.delete_media(id).await
    }

    async fn media_by_post(&self, post_id: &str) -> StoreResult<Vec<Media>> {
        self.record(StoreCall::MediaByPost {
            post_id: post_id.to_string(),
        });
        self.inner.media_by_post(post_id).await
    }
}

/// A mock upload service.
///
/// Returns `https://cdn.test/{file_name}` unless a url is preset, walks
/// the callback through configurable progress steps, and can be told to
/// reject specific files.
#[derive(Clone)]
pub struct MockUploader {
    urls: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
    progress_steps: Vec<u8>,
}

impl Default for MockUploader {
    fn default() -> Self {
        Self {
            urls: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            progress_steps: vec![50, 100],
        }
    }
}

impl MockUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the url returned for a file name.
    pub fn with_url(self, file_name: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.write().unwrap().insert(file_name.into(), url.into());
        self
    }

    /// Reject uploads of the given file name.
    pub fn failing_on(self, file_name: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(file_name.into());
        self
    }

    /// Progress percentages reported per upload, in order.
    pub fn with_progress_steps(mut self, steps: Vec<u8>) -> Self {
        self.progress_steps = steps;
        self
    }

    /// File names uploaded so far, in call order.
    pub fn uploaded_files(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl MediaUploader for MockUploader {
    async fn upload(
        &self,
        file: &SelectedFile,
        _related_post: &str,
        on_progress: ProgressCallback,
    ) -> UploadResult<String> {
        self.calls.write().unwrap().push(file.file_name.clone());

        if self.failing.read().unwrap().contains(&file.file_name) {
            return Err(UploadError::Rejected(format!(
                "mock upload failure for {}",
                file.file_name
            )));
        }

        for step in &self.progress_steps {
            on_progress(*step);
        }

        let url = self
            .urls
            .read()
            .unwrap()
            .get(&file.file_name)
            .cloned()
            .unwrap_or_else(|| format!("https://cdn.test/{}", file.file_name));
        Ok(url)
    }
}

/// Wires a recording store, mock uploader, static probe, and fixed
/// identity into ready-to-drive sessions.
///
/// Keep the scenario around: its fields are the same handles the session
/// uses, so they can be asserted on after the fact.
pub struct TestScenario {
    pub store: RecordingStore,
    pub uploader: MockUploader,
    pub probe: StaticProbe,
    pub identity: FixedIdentity,
}

impl Default for TestScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScenario {
    pub fn new() -> Self {
        Self {
            store: RecordingStore::new(),
            uploader: MockUploader::new(),
            probe: StaticProbe::new().with_fallback(Duration::from_secs(10)),
            identity: FixedIdentity::user("user-1"),
        }
    }

    pub fn with_store(mut self, store: RecordingStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_uploader(mut self, uploader: MockUploader) -> Self {
        self.uploader = uploader;
        self
    }

    pub fn with_probe(mut self, probe: StaticProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_identity(mut self, identity: FixedIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// A session authoring a brand new post.
    pub fn session(
        &self,
    ) -> AuthoringSession<RecordingStore, MockUploader, StaticProbe, FixedIdentity> {
        AuthoringSession::new(
            self.store.clone(),
            self.uploader.clone(),
            self.probe.clone(),
            self.identity.clone(),
        )
    }

    /// A session editing a seeded post.
    pub async fn edit_session(
        &self,
        post_id: &str,
    ) -> StoreResult<AuthoringSession<RecordingStore, MockUploader, StaticProbe, FixedIdentity>>
    {
        AuthoringSession::edit(
            self.store.clone(),
            self.uploader.clone(),
            self.probe.clone(),
            self.identity.clone(),
            post_id,
        )
        .await
    }
}
