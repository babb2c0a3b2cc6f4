//! Profile commands - manage saved server logins

use crate::cli::style::{bullet, check, Stylize};
use anstream::println;
use dialoguer::Password;
use std::path::Path;
use text2jira::error::{Error, Result};
use text2jira::profile::ProfileStore;
use url::Url;

/// Run the profile add command
pub fn run_profile_add(
    profiles_path: &Path,
    url: &str,
    user: &str,
    password: Option<String>,
) -> Result<()> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt(format!("Password for {user}"))
            .with_confirmation("Repeat password", "Passwords don't match")
            .interact()
            .map_err(|e| Error::Auth(format!("cannot read password: {e}")))?,
    };

    let mut store = ProfileStore::open(profiles_path)?;
    let profile = store.add(url, user, password);
    let location = store.path().display().to_string();
    store.close()?;

    println!("{} Saved profile {}", check(), profile.id.accent());
    println!("  {}", location.muted());
    Ok(())
}

/// Run the profile list command
pub fn run_profile_list(profiles_path: &Path) -> Result<()> {
    let store = ProfileStore::open(profiles_path)?;

    if store.list().is_empty() {
        println!("{}", "No saved profiles".muted());
        println!(
            "{}",
            "Add one with: text2jira profile add <url> <user>".muted()
        );
    }

    for profile in store.list() {
        println!(
            "{} {}  {} @ {}  {}",
            bullet(),
            profile.id.accent(),
            profile.user.emphasis(),
            profile.url,
            profile.created_at.format("%Y-%m-%d").to_string().muted()
        );
    }

    store.close()
}

/// Run the profile remove command
pub fn run_profile_remove(profiles_path: &Path, id: &str) -> Result<()> {
    let mut store = ProfileStore::open(profiles_path)?;
    if !store.remove(id) {
        return Err(Error::Profile(format!("no profile with id '{id}'")));
    }
    store.close()?;

    println!("{} Removed profile {}", check(), id.accent());
    Ok(())
}
