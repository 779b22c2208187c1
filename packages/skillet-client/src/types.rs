//! Wire types for the Skillet REST API.
//!
//! Field names mirror the JSON the backend speaks, so everything here is
//! `camelCase` on the wire. Responses routinely omit fields depending on the
//! endpoint, hence the liberal use of `Option` and `#[serde(default)]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as embedded in post, comment, and group responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Reference to a user by id, for stamping ownership onto create requests.
#[derive(Debug, Clone, Serialize)]
pub struct UserId {
    pub id: String,
}

/// A cooking post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub delete_status: Option<bool>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    /// Some endpoints embed the post's media, others return it bare.
    #[serde(default)]
    pub media: Option<Vec<Media>>,
}

/// Body for creating or updating a post.
///
/// The backend expects the full record: the web client sends `createdAt`,
/// `likeCount`, and `createdBy` itself rather than letting the server stamp
/// them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub delete_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl NewPost {
    /// Post body with a fresh timestamp and a zeroed like count.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
            like_count: 0,
            delete_status: false,
            created_by: None,
        }
    }

    /// Stamp the authoring user's id onto the body.
    pub fn created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }
}

/// A media record attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub delete_status: Option<bool>,
    #[serde(default)]
    pub related_post: Option<String>,
}

/// Body for creating a media record once its file has been uploaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedia {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub delete_status: bool,
    pub related_post: String,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub comment: String,
    #[serde(default)]
    pub commented_by: Option<UserRef>,
    #[serde(default)]
    pub commented_on: Option<String>,
    #[serde(default)]
    pub commented_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delete_status: Option<bool>,
}

/// A like on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub post_id: Option<String>,
}

/// Whether the current user has liked a post, and with which like record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub liked: bool,
    #[serde(default)]
    pub like_id: Option<String>,
}

/// A cooking group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<UserRef>>,
}

/// Body for creating or updating a group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

/// A post inside a group. Carries at most one media URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPost {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posted_by: Option<UserRef>,
    #[serde(default)]
    pub media_url: Option<String>,
}

/// Body for creating or updating a group post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroupPost {
    pub title: String,
    pub description: String,
    pub group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// A learning task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub estimate_time: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub delete_status: Option<bool>,
}

/// Body for creating or updating a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub estimate_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A record of a user completing a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    pub id: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_by: Option<UserRef>,
    #[serde(default)]
    pub spent_time: Option<i64>,
    #[serde(default)]
    pub task: Option<Task>,
}

/// Whether a user has completed a given task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatus {
    pub completed: bool,
}

/// A learning plan. The backend keys these by `planId`, not `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub plan_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub time_required: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for updating a learning plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    pub title: String,
    pub description: String,
    pub time_required: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A progress update on a learning journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: String,
    pub title: String,
    pub update: String,
    #[serde(default)]
    pub goals_achieved: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating a progress update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressUpdate {
    pub title: String,
    pub update: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_achieved: Option<String>,
}

/// Body for creating a notification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A notification delivered to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wrapper for the unread-count endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UnreadCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_serializes_camel_case() {
        let body = NewPost::new("Sourdough basics", "Flour, water, time.").created_by("user-1");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["title"], "Sourdough basics");
        assert_eq!(value["likeCount"], 0);
        assert_eq!(value["deleteStatus"], false);
        assert_eq!(value["createdBy"], "user-1");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_new_post_omits_missing_author() {
        let value = serde_json::to_value(NewPost::new("t", "d")).unwrap();
        assert!(value.get("createdBy").is_none());
    }

    #[test]
    fn test_media_kind_renames_to_type() {
        let body = NewMedia {
            kind: "video".into(),
            url: "https://cdn.example/clip.mp4".into(),
            delete_status: false,
            related_post: "post-1".into(),
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["type"], "video");
        assert_eq!(value["relatedPost"], "post-1");
    }

    #[test]
    fn test_post_tolerates_sparse_responses() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "post-1",
            "title": "Pancakes",
            "description": "Stack of three."
        }))
        .unwrap();

        assert!(post.created_at.is_none());
        assert!(post.like_count.is_none());
        assert!(post.media.is_none());
    }
}
