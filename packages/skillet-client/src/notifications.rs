//! Notification endpoints.

use reqwest::Method;
use serde_json::json;

use crate::error::Result;
use crate::types::{NewNotification, Notification, UnreadCount};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every notification.
    pub async fn all_notifications(&self) -> Result<Vec<Notification>> {
        self.get_json("/notifications").await
    }

    /// Fetch a user's notifications.
    pub async fn notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.get_json(&format!("/notifications/my-notifications/{}", user_id))
            .await
    }

    /// Fetch a single notification.
    pub async fn get_notification(&self, id: &str) -> Result<Notification> {
        self.get_json(&format!("/notifications/{}", id)).await
    }

    /// Create a notification.
    pub async fn create_notification(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification> {
        self.post_json("/notifications", notification).await
    }

    /// Send a notification to a user.
    pub async fn notify_user(
        &self,
        user_id: &str,
        title: &str,
        subtitle: &str,
    ) -> Result<Notification> {
        let body = json!({
            "title": title,
            "subtitle": subtitle,
        });
        self.post_json(&format!("/notifications/user/{}", user_id), &body)
            .await
    }

    /// Mark a notification as read.
    pub async fn mark_notification_read(&self, id: &str) -> Result<Notification> {
        let resp = self
            .request(Method::PATCH, &format!("/notifications/{}/read", id))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Delete a notification. Returns `true` on `204 No Content`.
    pub async fn delete_notification(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/notifications/{}", id)).await
    }

    /// Count a user's unread notifications.
    pub async fn unread_notification_count(&self, user_id: &str) -> Result<i64> {
        let counted: UnreadCount = self
            .get_json(&format!("/notifications/user/{}/unread-count", user_id))
            .await?;
        Ok(counted.count)
    }
}
