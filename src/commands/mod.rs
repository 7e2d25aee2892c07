//! Command handlers
//!
//! Each subcommand loads the configuration and state file it needs, drives
//! the provider and writes the result back.

mod config_file;
mod lifecycle;

use log::debug;

use crate::cli::{Cli, Command};
use crate::litellm::{LiteLlmClient, Provider, SettingsResolver};
use crate::output::{output_resource_types, output_schema};

pub use config_file::load_config;

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Dispatch the parsed command line
pub async fn run(cli: &Cli) -> CommandResult {
    match &cli.command {
        Command::Schema(args) => {
            match args.resource_type {
                Some(kind) => output_schema(kind.schema(), args.output),
                None => output_resource_types(args.output),
            }
            Ok(())
        }
        Command::Validate(args) => lifecycle::run_validate(args),
        Command::Plan(args) => lifecycle::run_plan(cli, args).await,
        Command::Apply(args) => lifecycle::run_apply(cli, args).await,
        Command::Refresh(args) => lifecycle::run_refresh(cli, args).await,
        Command::Import(args) => lifecycle::run_import(cli, args).await,
        Command::Destroy(args) => lifecycle::run_destroy(cli, args).await,
    }
}

/// Resolve settings and build a provider talking to the proxy
pub fn connect(cli: &Cli) -> crate::Result<Provider> {
    let settings = SettingsResolver::new().resolve(
        cli.api_base.as_deref(),
        cli.api_key.as_deref(),
        cli.insecure_skip_verify,
    )?;
    debug!("Using LiteLLM API at {}", settings.api_base);
    let client = LiteLlmClient::new(&settings)?;
    Ok(Provider::new(client))
}
