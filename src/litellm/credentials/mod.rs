//! Stored credentials - named provider secrets models can reference

mod api;
mod models;
mod resource;

pub use models::CredentialResponse;
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("credential_name")
        .required()
        .force_new()
        .describe("Unique name; used as the identifier"),
    Attribute::string_map("credential_info")
        .describe("Non-secret details such as the provider"),
    Attribute::string_map("credential_values")
        .required()
        .sensitive()
        .describe("Secret values (api_key, api_base, ...); never read back"),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_credential",
    description: "A LiteLLM stored credential",
    attributes: ATTRIBUTES,
};
