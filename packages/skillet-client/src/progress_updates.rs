//! Progress update endpoints.

use serde_json::json;

use crate::error::Result;
use crate::types::{NewProgressUpdate, ProgressUpdate};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every progress update.
    pub async fn all_progress_updates(&self) -> Result<Vec<ProgressUpdate>> {
        self.get_json("/progress").await
    }

    /// Fetch a single progress update.
    pub async fn get_progress_update(&self, id: &str) -> Result<ProgressUpdate> {
        self.get_json(&format!("/progress/{}", id)).await
    }

    /// Fetch a user's progress updates.
    pub async fn progress_updates_by_user(&self, user_id: &str) -> Result<Vec<ProgressUpdate>> {
        self.get_json(&format!("/progress/user/{}", user_id)).await
    }

    /// Create a progress update owned by the acting user.
    pub async fn create_progress_update(
        &self,
        update: &NewProgressUpdate,
    ) -> Result<ProgressUpdate> {
        let user_id = self.current_user()?;
        let mut body = serde_json::to_value(update)
            .map_err(|e| crate::ClientError::Parse(e.to_string()))?;
        body["user"] = json!({ "id": user_id });
        self.post_json("/progress", &body).await
    }

    /// Update a progress update.
    pub async fn update_progress_update(
        &self,
        id: &str,
        update: &NewProgressUpdate,
    ) -> Result<ProgressUpdate> {
        self.put_json(&format!("/progress/{}", id), update).await
    }

    /// Delete a progress update. Returns `true` on `204 No Content`.
    pub async fn delete_progress_update(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/progress/{}", id)).await
    }
}
