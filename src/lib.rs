//! text2jira - turn a plain-text outline into Jira tickets
//!
//! The [`outline`] parser reads `-`/`+`/`*` prefixed lines into a tree of
//! [`types::IssueRecord`]s. The [`submit`] engine resolves the target board
//! and creates one ticket per record through a [`tracker::TrackerService`].

pub mod auth;
pub mod error;
pub mod outline;
pub mod profile;
pub mod submit;
pub mod tracker;
pub mod types;
