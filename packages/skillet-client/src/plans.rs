//! Learning plan endpoints.

use serde_json::json;

use crate::error::Result;
use crate::types::{LearningPlan, PlanUpdate};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every learning plan.
    pub async fn all_plans(&self) -> Result<Vec<LearningPlan>> {
        self.get_json("/learning-plan").await
    }

    /// Fetch a single plan.
    pub async fn get_plan(&self, plan_id: &str) -> Result<LearningPlan> {
        self.get_json(&format!("/learning-plan/{}", plan_id)).await
    }

    /// Fetch a user's plans.
    pub async fn plans_by_user(&self, user_id: &str) -> Result<Vec<LearningPlan>> {
        self.get_json(&format!("/learning-plan/user/{}", user_id))
            .await
    }

    /// Create a plan owned by the acting user.
    pub async fn create_plan(
        &self,
        title: &str,
        description: &str,
        time_required: i64,
        kind: &str,
    ) -> Result<LearningPlan> {
        let user_id = self.current_user()?;
        let body = json!({
            "title": title,
            "description": description,
            "timeRequired": time_required,
            "type": kind,
            "user": { "id": user_id },
        });
        self.post_json("/learning-plan", &body).await
    }

    /// Update a plan.
    pub async fn update_plan(&self, plan_id: &str, plan: &PlanUpdate) -> Result<LearningPlan> {
        self.put_json(&format!("/learning-plan/{}", plan_id), plan)
            .await
    }

    /// Delete a plan. Returns `true` on `204 No Content`.
    pub async fn delete_plan(&self, plan_id: &str) -> Result<bool> {
        self.delete(&format!("/learning-plan/{}", plan_id)).await
    }
}
