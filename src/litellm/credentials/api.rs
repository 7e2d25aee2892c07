//! Credential API operations

use crate::config::api;
use crate::error::Result;
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::CredentialResponse;

fn credential_path(name: &str) -> String {
    format!("{}/{}", api::CREDENTIALS, urlencoding::encode(name))
}

impl LiteLlmClient {
    /// Store a credential
    pub async fn create_credential(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::CREDENTIALS).json(payload),
            ResourceKind::Credential,
            "creating credential",
        )
        .await?;
        Ok(())
    }

    /// Get a credential by name
    pub async fn get_credential(&self, name: &str) -> Result<CredentialResponse> {
        let path = format!("{}/{}", api::CREDENTIALS_BY_NAME, urlencoding::encode(name));
        let context = format!("reading credential '{}'", name);
        let body = self
            .execute(self.get(&path), ResourceKind::Credential, &context)
            .await?;
        Self::decode(body, "credential")
    }

    /// Patch a credential by name
    pub async fn update_credential(&self, name: &str, payload: &Attributes) -> Result<()> {
        let context = format!("updating credential '{}'", name);
        self.execute(
            self.patch(&credential_path(name)).json(payload),
            ResourceKind::Credential,
            &context,
        )
        .await?;
        Ok(())
    }

    /// Delete a credential by name
    pub async fn delete_credential(&self, name: &str) -> Result<()> {
        let context = format!("deleting credential '{}'", name);
        self.execute(
            self.delete(&credential_path(name)),
            ResourceKind::Credential,
            &context,
        )
        .await?;
        Ok(())
    }
}
