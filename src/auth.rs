//! Tracker credentials
//!
//! Resolves server, user and password from command-line flags, a saved
//! profile, or environment variables.

use crate::error::{Error, Result};
use crate::profile::Profile;
use crate::types::TrackerConfig;
use std::env;

/// Server URL environment variable
pub const SERVER_ENV: &str = "JIRA_SERVER";
/// User name environment variable
pub const USER_ENV: &str = "JIRA_USER";
/// Password environment variable
pub const PASSWORD_ENV: &str = "JIRA_PASSWORD";
/// API token environment variable, used when no password is set
pub const TOKEN_ENV: &str = "JIRA_API_TOKEN";

/// Source of the password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Given on the command line or typed at a prompt
    Explicit,
    /// Taken from a saved profile
    Profile,
    /// Taken from an environment variable
    EnvVar,
}

/// Values given directly by the user; any may be missing
#[derive(Debug, Clone, Default)]
pub struct CredentialArgs {
    /// Server URL
    pub server: Option<String>,
    /// User name
    pub user: Option<String>,
    /// Password or API token
    pub password: Option<String>,
}

/// Resolved credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Connection settings for the tracker
    pub config: TrackerConfig,
    /// Where the password was obtained from
    pub source: AuthSource,
}

/// Resolve credentials from the process environment
///
/// Priority per field:
/// 1. explicit value
/// 2. saved profile
/// 3. `JIRA_SERVER` / `JIRA_USER` / `JIRA_PASSWORD` (then `JIRA_API_TOKEN`)
pub fn resolve_credentials(
    args: &CredentialArgs,
    profile: Option<&Profile>,
) -> Result<Credentials> {
    resolve_credentials_with(args, profile, |key| env::var(key).ok())
}

/// Resolve credentials with a custom environment lookup
pub fn resolve_credentials_with<F>(
    args: &CredentialArgs,
    profile: Option<&Profile>,
    lookup: F,
) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let server = args
        .server
        .clone()
        .or_else(|| profile.map(|p| p.url.clone()))
        .or_else(|| lookup(SERVER_ENV))
        .ok_or_else(|| {
            Error::Auth(format!("No server given. Pass --server, --profile or set {SERVER_ENV}"))
        })?;

    let user = args
        .user
        .clone()
        .or_else(|| profile.map(|p| p.user.clone()))
        .or_else(|| lookup(USER_ENV))
        .ok_or_else(|| {
            Error::Auth(format!("No user given. Pass --user, --profile or set {USER_ENV}"))
        })?;

    let (password, source) = if let Some(password) = args.password.clone() {
        (password, AuthSource::Explicit)
    } else if let Some(profile) = profile {
        (profile.password.clone(), AuthSource::Profile)
    } else if let Some(password) = lookup(PASSWORD_ENV).or_else(|| lookup(TOKEN_ENV)) {
        (password, AuthSource::EnvVar)
    } else {
        return Err(Error::Auth(format!(
            "No password given. Pass --password, --profile or set {PASSWORD_ENV} or {TOKEN_ENV}"
        )));
    };

    Ok(Credentials {
        config: TrackerConfig {
            server,
            user,
            password,
        },
        source,
    })
}

/// Whether a password is available without prompting
pub fn has_password(args: &CredentialArgs, profile: Option<&Profile>) -> bool {
    args.password.is_some()
        || profile.is_some()
        || env::var(PASSWORD_ENV).is_ok_and(|v| !v.trim().is_empty())
        || env::var(TOKEN_ENV).is_ok_and(|v| !v.trim().is_empty())
}
