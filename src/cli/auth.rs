//! Auth command and shared credential resolution

use crate::cli::style::{check, Stylize};
use anstream::println;
use dialoguer::{Password, Select};
use std::io::IsTerminal;
use std::path::Path;
use text2jira::auth::{has_password, resolve_credentials, CredentialArgs, Credentials, SERVER_ENV};
use text2jira::error::{Error, Result};
use text2jira::profile::{Profile, ProfileStore};
use text2jira::tracker::create_tracker_service;

/// Load a saved profile by ID (or unique ID prefix)
fn load_profile(profiles_path: &Path, id: &str) -> Result<Profile> {
    let store = ProfileStore::open(profiles_path)?;
    let profile = store
        .get(id)
        .cloned()
        .ok_or_else(|| Error::Profile(format!("no profile with id '{id}'")))?;
    store.close()?;
    Ok(profile)
}

/// Let the user pick a saved profile when nothing names a server
fn pick_profile(profiles_path: &Path) -> Result<Option<Profile>> {
    let store = ProfileStore::open(profiles_path)?;
    if store.list().is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = store
        .list()
        .iter()
        .map(|p| format!("{} @ {}", p.user, p.url))
        .collect();

    let choice = Select::new()
        .with_prompt("Select a saved server")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| Error::Auth(format!("cannot read selection: {e}")))?;

    let profile = choice.and_then(|idx| store.list().get(idx).cloned());
    store.close()?;
    Ok(profile)
}

/// Resolve credentials for a command, prompting when on a terminal
pub fn resolve_connection(
    mut args: CredentialArgs,
    profile_id: Option<&str>,
    profiles_path: &Path,
) -> Result<Credentials> {
    let interactive = std::io::stdin().is_terminal();

    let profile = match profile_id {
        Some(id) => Some(load_profile(profiles_path, id)?),
        None if interactive
            && args.server.is_none()
            && std::env::var(SERVER_ENV).is_err() =>
        {
            pick_profile(profiles_path)?
        }
        None => None,
    };

    if interactive && !has_password(&args, profile.as_ref()) {
        let password = Password::new()
            .with_prompt("Jira password")
            .interact()
            .map_err(|e| Error::Auth(format!("cannot read password: {e}")))?;
        args.password = Some(password);
    }

    resolve_credentials(&args, profile.as_ref())
}

/// Run the auth test command
pub async fn run_auth_test(
    args: CredentialArgs,
    profile_id: Option<&str>,
    profiles_path: &Path,
) -> Result<()> {
    let creds = resolve_connection(args, profile_id, profiles_path)?;
    println!("Testing Jira authentication...");

    let tracker = create_tracker_service(&creds.config)?;
    let username = tracker.current_user().await?;

    println!("{} Authenticated as: {}", check(), username.accent());
    println!("Server: {}", tracker.config().server);
    println!("Credential source: {}", format!("{:?}", creds.source).muted());
    Ok(())
}
