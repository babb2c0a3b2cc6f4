//! Saved server profiles
//!
//! A small JSON file of `(url, user, password)` entries keyed by an opaque
//! ID. The store is opened explicitly, mutated in memory and written back on
//! [`ProfileStore::close`].

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;

/// File name inside the config directory
const PROFILES_FILE: &str = "profiles.json";

/// A saved server login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Opaque identifier
    pub id: String,
    /// Server base URL
    pub url: String,
    /// User name
    pub user: String,
    /// Password or API token
    pub password: String,
    /// When the profile was saved
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileFile {
    profiles: Vec<Profile>,
}

/// Handle to the profile file
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profiles: Vec<Profile>,
    dirty: bool,
}

impl ProfileStore {
    /// Open a store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let profiles = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => {
                let file: ProfileFile = serde_json::from_str(&content).map_err(|e| {
                    Error::Profile(format!("cannot parse {}: {e}", path.display()))
                })?;
                file.profiles
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {} profiles from {}", profiles.len(), path.display());
        Ok(Self {
            path,
            profiles,
            dirty: false,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a new profile and return it
    pub fn add(
        &mut self,
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Profile {
        let profile = Profile {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            user: user.into(),
            password: password.into(),
            created_at: Utc::now(),
        };
        self.profiles.push(profile.clone());
        self.dirty = true;
        profile
    }

    /// All profiles in insertion order
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up a profile by ID
    ///
    /// A unique ID prefix is accepted too, so `a1b2` finds `a1b2c3d4-...`.
    pub fn get(&self, id: &str) -> Option<&Profile> {
        if let Some(exact) = self.profiles.iter().find(|p| p.id == id) {
            return Some(exact);
        }
        if id.is_empty() {
            return None;
        }
        let mut matches = self.profiles.iter().filter(|p| p.id.starts_with(id));
        let first = matches.next()?;
        matches.next().is_none().then_some(first)
    }

    /// Remove a profile; returns whether it existed
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(full_id) = self.get(id).map(|p| p.id.clone()) else {
            return false;
        };
        self.profiles.retain(|p| p.id != full_id);
        self.dirty = true;
        true
    }

    /// Write pending changes and release the store
    pub fn close(self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let file = ProfileFile {
            profiles: self.profiles,
        };
        let content = serde_json::to_string_pretty(&file)?;

        // Owner-only temp file (0600 on unix), renamed over the target.
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved {} profiles to {}", file.profiles.len(), self.path.display());
        Ok(())
    }
}

/// Default location of the profile file
pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("text2jira").join(PROFILES_FILE))
        .ok_or_else(|| Error::Profile("could not determine config directory".to_string()))
}
