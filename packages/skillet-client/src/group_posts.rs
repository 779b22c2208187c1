//! Group post endpoints.
//!
//! Unlike the rest of the API, these identify the acting user with a
//! `User-ID` header rather than a body field.

use reqwest::Method;

use crate::error::Result;
use crate::types::{GroupPost, NewGroupPost};
use crate::SkilletClient;

const USER_ID_HEADER: &str = "User-ID";

impl SkilletClient {
    /// Fetch every group post.
    pub async fn all_group_posts(&self) -> Result<Vec<GroupPost>> {
        self.get_json("/group-posts").await
    }

    /// Fetch a single group post.
    pub async fn get_group_post(&self, post_id: &str) -> Result<GroupPost> {
        self.get_json(&format!("/group-posts/{}", post_id)).await
    }

    /// Fetch the posts in a group.
    pub async fn group_posts_by_group(&self, group_id: &str) -> Result<Vec<GroupPost>> {
        self.get_json(&format!("/group-posts/group/{}", group_id))
            .await
    }

    /// Fetch a user's group posts.
    pub async fn group_posts_by_user(&self, user_id: &str) -> Result<Vec<GroupPost>> {
        self.get_json(&format!("/group-posts/user/{}", user_id))
            .await
    }

    /// Fetch the acting user's group posts.
    pub async fn my_group_posts(&self) -> Result<Vec<GroupPost>> {
        let user_id = self.current_user()?.to_string();
        self.group_posts_by_user(&user_id).await
    }

    /// Create a post in a group as the acting user.
    pub async fn create_group_post(&self, post: &NewGroupPost) -> Result<GroupPost> {
        let user_id = self.current_user()?.to_string();
        let resp = self
            .request(Method::POST, "/group-posts")
            .header(USER_ID_HEADER, user_id)
            .json(post)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Update a group post as the acting user.
    pub async fn update_group_post(&self, post_id: &str, post: &NewGroupPost) -> Result<GroupPost> {
        let user_id = self.current_user()?.to_string();
        let resp = self
            .request(Method::PUT, &format!("/group-posts/{}", post_id))
            .header(USER_ID_HEADER, user_id)
            .json(post)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Delete a group post as the acting user. Returns `true` on `204`.
    pub async fn delete_group_post(&self, post_id: &str) -> Result<bool> {
        let user_id = self.current_user()?.to_string();
        let resp = self
            .request(Method::DELETE, &format!("/group-posts/{}", post_id))
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(crate::ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(status == reqwest::StatusCode::NO_CONTENT)
    }
}
