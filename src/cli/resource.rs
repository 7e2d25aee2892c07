//! Per-command arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;
use crate::litellm::ResourceKind;

use super::OutputFormat;

/// Arguments for 'schema'
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Resource type (e.g. team or litellm_team); lists all types when omitted
    pub resource_type: Option<ResourceKind>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'validate'
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// Configuration file (JSON or YAML)
    #[arg(short = 'f', long)]
    pub file: PathBuf,
}

/// Arguments for 'plan'
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// Configuration file (JSON or YAML)
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// State file
    #[arg(long, default_value = defaults::STATE_FILE)]
    pub state: PathBuf,

    /// Refresh state from the API before planning
    #[arg(long, default_value_t = false)]
    pub refresh: bool,
}

/// Arguments for 'apply'
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// Configuration file (JSON or YAML)
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// State file
    #[arg(long, default_value = defaults::STATE_FILE)]
    pub state: PathBuf,

    /// Output format for the resulting state
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'refresh'
#[derive(Parser, Debug)]
pub struct StateArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// State file
    #[arg(long, default_value = defaults::STATE_FILE)]
    pub state: PathBuf,

    /// Output format for the resulting state
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'import'
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// Identifier of the existing entity
    ///
    ///   team_member       <team_id>:<user_id or user_email>
    ///   team_member_add   <team_id>
    ///   credential        <credential_name>
    ///   others            the server id
    #[arg(verbatim_doc_comment)]
    pub id: String,

    /// State file
    #[arg(long, default_value = defaults::STATE_FILE)]
    pub state: PathBuf,

    /// Overwrite a state file that already tracks an entity
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Output format for the resulting state
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'destroy'
#[derive(Parser, Debug)]
pub struct DestroyArgs {
    /// Resource type (e.g. team or litellm_team)
    pub resource_type: ResourceKind,

    /// State file
    #[arg(long, default_value = defaults::STATE_FILE)]
    pub state: PathBuf,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
