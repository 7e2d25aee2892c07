//! validate, plan, apply, refresh, import and destroy handlers

use log::{debug, info};

use crate::cli::{ApplyArgs, Cli, DestroyArgs, ImportArgs, PlanArgs, StateArgs, ValidateArgs};
use crate::error::{ProviderError, Result};
use crate::litellm::{Provider, ResourceKind};
use crate::output::{output_plan, output_state};
use crate::state::{ResourceData, StateStore};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::{connect, load_config, CommandResult};

/// Load a state file and make sure it belongs to `kind`
fn load_state(store: &StateStore, kind: ResourceKind) -> Result<Option<ResourceData>> {
    let Some(data) = store.load()? else {
        return Ok(None);
    };
    if data.resource_type != kind.type_name() {
        return Err(ProviderError::State(format!(
            "{} holds a {} resource, not {}",
            store.path().display(),
            data.resource_type,
            kind
        )));
    }
    Ok(Some(data))
}

pub fn run_validate(args: &ValidateArgs) -> CommandResult {
    let config = load_config(&args.file)?;
    Provider::validate(args.resource_type, &config)?;
    println!(
        "{} configuration in {} is valid",
        args.resource_type,
        args.file.display()
    );
    Ok(())
}

pub async fn run_plan(cli: &Cli, args: &PlanArgs) -> CommandResult {
    let kind = args.resource_type;
    let config = load_config(&args.file)?;
    Provider::validate(kind, &config)?;

    let store = StateStore::new(&args.state);
    let mut state = load_state(&store, kind)?;

    if args.refresh {
        if let Some(current) = state.take().filter(|s| s.is_present()) {
            let provider = connect(cli)?;
            let spinner = create_spinner(&format!("Refreshing {}...", kind), cli.batch);
            let refreshed = provider.read(kind, &current).await;
            finish_spinner(spinner, "Refreshed");
            state = refreshed?;
            if state.is_none() {
                eprintln!("{} '{}' no longer exists", kind, current.id());
            }
        }
    }

    let planned = Provider::plan(kind, state.as_ref(), &config)?;
    output_plan(kind, state.as_ref(), &planned);
    Ok(())
}

pub async fn run_apply(cli: &Cli, args: &ApplyArgs) -> CommandResult {
    let kind = args.resource_type;
    let config = load_config(&args.file)?;
    Provider::validate(kind, &config)?;

    let store = StateStore::new(&args.state);
    let stored = load_state(&store, kind)?;
    let provider = connect(cli)?;

    let spinner = create_spinner(&format!("Applying {}...", kind), cli.batch);
    let result: Result<_> = async {
        // Drift check: an entity deleted out of band is created again
        let current = match stored.filter(|s| s.is_present()) {
            Some(s) => provider.read(kind, &s).await?,
            None => None,
        };
        provider.apply(kind, current.as_ref(), &config).await
    }
    .await;
    finish_spinner(spinner, "Done");

    let outcome = result?;
    eprintln!("{}", outcome);
    let mut data = outcome.into_data();
    data.touch();
    store.save(&data)?;
    debug!("State written to {}", store.path().display());

    output_state(&data, args.output);
    Ok(())
}

pub async fn run_refresh(cli: &Cli, args: &StateArgs) -> CommandResult {
    let kind = args.resource_type;
    let store = StateStore::new(&args.state);
    let current = load_state(&store, kind)?
        .filter(|s| s.is_present())
        .ok_or_else(|| format!("No {} tracked in {}", kind, store.path().display()))?;

    let provider = connect(cli)?;
    let spinner = create_spinner(&format!("Refreshing {} '{}'...", kind, current.id()), cli.batch);
    let refreshed = provider.read(kind, &current).await;
    finish_spinner(spinner, "Refreshed");

    match refreshed? {
        Some(mut data) => {
            data.touch();
            store.save(&data)?;
            output_state(&data, args.output);
        }
        None => {
            store.clear()?;
            eprintln!(
                "{} '{}' no longer exists; state cleared",
                kind,
                current.id()
            );
        }
    }
    Ok(())
}

pub async fn run_import(cli: &Cli, args: &ImportArgs) -> CommandResult {
    let kind = args.resource_type;
    let store = StateStore::new(&args.state);
    if let Some(existing) = load_state(&store, kind)?.filter(|s| s.is_present()) {
        if !args.force {
            return Err(format!(
                "{} already tracks {} '{}' (use --force to overwrite)",
                store.path().display(),
                kind,
                existing.id()
            )
            .into());
        }
        info!("Overwriting state of {} '{}'", kind, existing.id());
    }

    let provider = connect(cli)?;
    let spinner = create_spinner(&format!("Importing {} '{}'...", kind, args.id), cli.batch);
    let imported = provider.import(kind, &args.id).await;
    finish_spinner(spinner, "Imported");

    let mut data = imported?;
    data.touch();
    store.save(&data)?;
    output_state(&data, args.output);
    Ok(())
}

pub async fn run_destroy(cli: &Cli, args: &DestroyArgs) -> CommandResult {
    let kind = args.resource_type;
    let store = StateStore::new(&args.state);
    let Some(current) = load_state(&store, kind)?.filter(|s| s.is_present()) else {
        eprintln!("No {} tracked in {}; nothing to destroy", kind, store.path().display());
        return Ok(());
    };

    let prompt = format!("Destroy {} '{}'?", kind, current.id());
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    let provider = connect(cli)?;
    let spinner = create_spinner(&format!("Destroying {} '{}'...", kind, current.id()), cli.batch);
    let deleted = provider.delete(kind, &current).await;
    finish_spinner(spinner, "Destroyed");
    deleted?;

    store.clear()?;
    eprintln!("{} '{}' destroyed", kind, current.id());
    Ok(())
}
