//! Vector stores registered with the proxy

mod api;
mod models;
mod resource;

pub use models::{VectorStore, VectorStoreInfoResponse};
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("vector_store_id")
        .optional_computed()
        .force_new()
        .describe("Vector store identifier; a UUIDv7 is generated when omitted"),
    Attribute::string("custom_llm_provider")
        .required()
        .describe("Provider hosting the store (bedrock, openai, ...)"),
    Attribute::string("vector_store_name"),
    Attribute::string("vector_store_description"),
    Attribute::string_map("vector_store_metadata"),
    Attribute::string("litellm_credential_name"),
    Attribute::string("created_at").computed(),
    Attribute::string("updated_at").computed(),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_vector_store",
    description: "A LiteLLM managed vector store",
    attributes: ATTRIBUTES,
};
