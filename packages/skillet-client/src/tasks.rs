//! Learning task endpoints.

use crate::error::Result;
use crate::types::{NewTask, Task};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every task.
    pub async fn all_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/tasks").await
    }

    /// Fetch the tasks of one type, e.g. `"beginner"`.
    pub async fn tasks_by_type(&self, kind: &str) -> Result<Vec<Task>> {
        self.get_json(&format!("/tasks/type/{}", kind)).await
    }

    /// Fetch a single task.
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        self.get_json(&format!("/tasks/{}", id)).await
    }

    /// Create a task.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.post_json("/tasks", task).await
    }

    /// Update a task.
    pub async fn update_task(&self, id: &str, task: &NewTask) -> Result<Task> {
        self.put_json(&format!("/tasks/{}", id), task).await
    }

    /// Delete a task. Returns `true` on `204 No Content`.
    pub async fn delete_task(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/tasks/{}", id)).await
    }
}
