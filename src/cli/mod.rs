//! CLI argument parsing

mod common;
mod resource;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

pub use common::OutputFormat;
pub use resource::{ApplyArgs, DestroyArgs, ImportArgs, PlanArgs, SchemaArgs, StateArgs, ValidateArgs};

/// Declarative provider for the LiteLLM proxy management API
#[derive(Parser, Debug)]
#[command(name = "litellm-provider")]
#[command(version)]
#[command(
    about = "Manage LiteLLM proxy teams, keys, users, models and more from declarative configuration",
    long_about = None
)]
pub struct Cli {
    /// Management API base URL (overrides env var and settings file)
    #[arg(long, global = true, env = env::API_BASE)]
    pub api_base: Option<String>,

    /// Master/admin key (overrides env var and settings file)
    #[arg(long, global = true, env = env::API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Disable TLS certificate verification (development only)
    #[arg(long, global = true, default_value_t = false)]
    pub insecure_skip_verify: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resource types or show the attributes of one
    Schema(SchemaArgs),

    /// Check a configuration file against its schema (no API calls)
    Validate(ValidateArgs),

    /// Show what apply would do
    Plan(PlanArgs),

    /// Create, update or replace the resource and write its state
    Apply(ApplyArgs),

    /// Re-read the resource and reconcile its state
    Refresh(StateArgs),

    /// Adopt an existing entity into a state file
    Import(ImportArgs),

    /// Delete the resource and clear its state
    #[command(visible_alias = "delete")]
    Destroy(DestroyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::litellm::ResourceKind;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["litellm-provider", "schema"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(!cli.insecure_skip_verify);
        match cli.command {
            Command::Schema(args) => {
                assert!(args.resource_type.is_none());
                assert_eq!(args.output, OutputFormat::Table);
            }
            other => panic!("Expected schema command, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_args() {
        let cli = Cli::parse_from([
            "litellm-provider",
            "apply",
            "team",
            "-f",
            "team.yaml",
            "--state",
            "team.state.json",
            "--batch",
        ]);
        assert!(cli.batch);
        match cli.command {
            Command::Apply(args) => {
                assert_eq!(args.resource_type, ResourceKind::Team);
                assert_eq!(args.file.to_str(), Some("team.yaml"));
                assert_eq!(args.state.to_str(), Some("team.state.json"));
            }
            other => panic!("Expected apply command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "litellm-provider",
            "refresh",
            "litellm_key",
            "--api-base",
            "http://localhost:4000",
            "-l",
            "debug",
        ]);
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:4000"));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_unknown_resource_type_rejected() {
        let result = Cli::try_parse_from(["litellm-provider", "validate", "workspace", "-f", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_destroy_alias_and_yes() {
        let cli = Cli::parse_from(["litellm-provider", "delete", "user", "-y"]);
        match cli.command {
            Command::Destroy(args) => {
                assert_eq!(args.resource_type, ResourceKind::User);
                assert!(args.yes);
            }
            other => panic!("Expected destroy command, got {:?}", other),
        }
    }
}
