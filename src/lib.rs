//! litellm-provider - Declarative management of a LiteLLM proxy
//!
//! Keeps teams, virtual keys, users, model deployments, credentials, vector
//! stores, MCP servers and team memberships of a LiteLLM proxy in line with
//! configuration files, tracking each managed entity in a JSON state file.
//!
//! # Features
//!
//! - Schema validation before any network call
//! - Plan, apply, refresh, import and destroy per resource
//! - Drift detection with replace-on-identity-change
//! - Table, JSON and YAML output
//!
//! # Example
//!
//! ```bash
//! # Show the attributes of a team
//! litellm-provider schema team
//!
//! # Preview and apply a team configuration
//! litellm-provider plan team -f team.yaml --state team.state.json
//! litellm-provider apply team -f team.yaml --state team.state.json
//!
//! # Adopt an existing key
//! litellm-provider import key 88dc28d0f030c55ed4ab77ed8faf098196cb1c05df778539800c9f1243fe6b4b --state key.state.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod litellm;
pub mod output;
pub mod reconcile;
pub mod schema;
pub mod state;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{ProviderError, Result};
pub use litellm::{
    ApplyOutcome, LiteLlmClient, Provider, ProviderSettings, ResourceKind, RetryConfig,
    SettingsResolver,
};
pub use reconcile::Plan;
pub use schema::{Attribute, Schema};
pub use state::{Attributes, ResourceData, StateStore};
