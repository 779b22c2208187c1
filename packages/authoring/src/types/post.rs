//! Platform records the workflow reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::media::MediaKind;

/// A persisted post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Id of the authoring user, when the platform knows one.
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
}

/// Fields for creating a post, also used whole-record for updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub created_by: Option<String>,
}

/// A persisted media record pointing at an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    pub kind: MediaKind,
    pub url: String,
    pub related_post: String,
}

/// Fields for creating a media record once its file is uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedia {
    pub kind: MediaKind,
    pub url: String,
    pub related_post: String,
}
