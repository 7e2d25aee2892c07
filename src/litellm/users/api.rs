//! User API operations

use serde_json::json;

use crate::config::api;
use crate::error::{ProviderError, Result};
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::{UserCreated, UserInfoResponse};

impl LiteLlmClient {
    /// Create a user
    pub async fn create_user(&self, payload: &Attributes) -> Result<UserCreated> {
        let body = self
            .execute(
                self.post(api::USER_NEW).json(payload),
                ResourceKind::User,
                "creating user",
            )
            .await?;
        Self::decode(body, "user create")
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<UserInfoResponse> {
        let path = format!("{}?user_id={}", api::USER_INFO, urlencoding::encode(user_id));
        let context = format!("reading user '{}'", user_id);
        let body = self
            .execute(self.get(&path), ResourceKind::User, &context)
            .await?;
        let response: UserInfoResponse = Self::decode(body, "user info")?;
        if response.user_info.is_none() {
            return Err(ProviderError::NotFound {
                resource: ResourceKind::User.label().to_string(),
                message: format!("{}: response carried no user_info", context),
            });
        }
        Ok(response)
    }

    /// Update a user; `payload` must carry `user_id`
    pub async fn update_user(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::USER_UPDATE).json(payload),
            ResourceKind::User,
            "updating user",
        )
        .await?;
        Ok(())
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let context = format!("deleting user '{}'", user_id);
        self.execute(
            self.post(api::USER_DELETE)
                .json(&json!({ "user_ids": [user_id] })),
            ResourceKind::User,
            &context,
        )
        .await?;
        Ok(())
    }
}
