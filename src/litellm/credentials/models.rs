//! Credential data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// Response of `/credentials/by_name/{name}`
///
/// The proxy masks `credential_values`; they are not decoded.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CredentialResponse {
    pub credential_name: Option<String>,
    pub credential_info: Option<Map<String, Value>>,
}

impl CredentialResponse {
    pub fn into_observed(self) -> Attributes {
        Observed::new()
            .put("credential_name", self.credential_name)
            .put_string_map("credential_info", self.credential_info)
            .into_attributes()
    }
}
