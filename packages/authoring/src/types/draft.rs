//! The editable draft behind the post form.

use serde::{Deserialize, Serialize};

use crate::types::post::Post;

/// The text fields of a post being written or edited.
///
/// `existing_id` is what distinguishes a create from an edit. It is also
/// how a half-finished submit keeps its footing: once the post record is
/// persisted the id is folded back in here, so a retry after a partial
/// failure updates the same post instead of creating a duplicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub existing_id: Option<String>,
}

impl PostDraft {
    /// Start a blank draft for a new post.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft editing an existing post.
    pub fn for_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            existing_id: Some(post.id.clone()),
        }
    }

    /// Whether submitting this draft updates an existing post.
    pub fn is_edit(&self) -> bool {
        self.existing_id.is_some()
    }
}
