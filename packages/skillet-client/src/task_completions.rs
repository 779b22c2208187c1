//! Task completion endpoints.

use serde_json::json;

use crate::error::Result;
use crate::types::{CompletionStatus, TaskCompletion};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every completion record.
    pub async fn all_completions(&self) -> Result<Vec<TaskCompletion>> {
        self.get_json("/task-completions").await
    }

    /// Fetch a user's completions.
    pub async fn completions_by_user(&self, user_id: &str) -> Result<Vec<TaskCompletion>> {
        self.get_json(&format!("/task-completions/user/{}", user_id))
            .await
    }

    /// Fetch the completions of a task.
    pub async fn completions_by_task(&self, task_id: &str) -> Result<Vec<TaskCompletion>> {
        self.get_json(&format!("/task-completions/task/{}", task_id))
            .await
    }

    /// Whether a user has completed a task.
    pub async fn completion_status(&self, user_id: &str, task_id: &str) -> Result<CompletionStatus> {
        self.get_json(&format!(
            "/task-completions/task/status/{}/{}",
            user_id, task_id
        ))
        .await
    }

    /// Record that the acting user completed a task, with minutes spent.
    pub async fn create_completion(
        &self,
        task_id: &str,
        spent_time: i64,
    ) -> Result<TaskCompletion> {
        let user_id = self.current_user()?;
        let body = json!({
            "taskId": task_id,
            "userId": user_id,
            "spentTime": spent_time,
            "completedBy": user_id,
            "task": task_id,
        });
        self.post_json(&format!("/task-completions/task/{}", task_id), &body)
            .await
    }

    /// Correct the minutes spent on a completion.
    pub async fn update_completion_time(
        &self,
        completion_id: &str,
        spent_time: i64,
    ) -> Result<TaskCompletion> {
        let body = json!({ "spentTime": spent_time });
        self.put_json(&format!("/task-completions/{}", completion_id), &body)
            .await
    }

    /// Delete a completion record. Returns `true` on `204 No Content`.
    pub async fn delete_completion(&self, completion_id: &str) -> Result<bool> {
        self.delete(&format!("/task-completions/{}", completion_id))
            .await
    }
}
