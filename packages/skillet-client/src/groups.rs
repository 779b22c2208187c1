//! Group endpoints.

use serde_json::json;

use crate::error::Result;
use crate::types::{Group, NewGroup};
use crate::SkilletClient;

impl SkilletClient {
    /// Fetch every group.
    pub async fn all_groups(&self) -> Result<Vec<Group>> {
        self.get_json("/groups").await
    }

    /// Fetch a single group.
    pub async fn get_group(&self, group_id: &str) -> Result<Group> {
        self.get_json(&format!("/groups/{}", group_id)).await
    }

    /// Fetch the groups a user belongs to.
    pub async fn groups_by_user(&self, user_id: &str) -> Result<Vec<Group>> {
        self.get_json(&format!("/groups/user/{}", user_id)).await
    }

    /// Fetch the acting user's groups.
    pub async fn my_groups(&self) -> Result<Vec<Group>> {
        let user_id = self.current_user()?.to_string();
        self.groups_by_user(&user_id).await
    }

    /// Create a new group.
    pub async fn create_group(&self, group: &NewGroup) -> Result<Group> {
        self.post_json("/groups", group).await
    }

    /// Update an existing group.
    pub async fn update_group(&self, group_id: &str, group: &NewGroup) -> Result<Group> {
        self.put_json(&format!("/groups/{}", group_id), group).await
    }

    /// Delete a group. Returns `true` on `204 No Content`.
    pub async fn delete_group(&self, group_id: &str) -> Result<bool> {
        self.delete(&format!("/groups/{}", group_id)).await
    }

    /// Add one user to a group.
    pub async fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<Group> {
        self.post_empty(&format!("/groups/{}/members/{}", group_id, user_id))
            .await
    }

    /// Add the acting user to a group.
    pub async fn join_group(&self, group_id: &str) -> Result<Group> {
        let user_id = self.current_user()?.to_string();
        self.add_group_member(group_id, &user_id).await
    }

    /// Add several users to a group at once.
    pub async fn add_group_members(&self, group_id: &str, user_ids: &[String]) -> Result<Group> {
        let body = json!({ "userIds": user_ids });
        self.post_json(&format!("/groups/{}/members", group_id), &body)
            .await
    }

    /// Remove a user from a group.
    pub async fn remove_group_member(&self, group_id: &str, user_id: &str) -> Result<Group> {
        let resp = self
            .request(
                reqwest::Method::DELETE,
                &format!("/groups/{}/members/{}", group_id, user_id),
            )
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Remove the acting user from a group.
    pub async fn leave_group(&self, group_id: &str) -> Result<Group> {
        let user_id = self.current_user()?.to_string();
        self.remove_group_member(group_id, &user_id).await
    }
}
