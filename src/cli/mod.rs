//! CLI commands
//!
//! Command implementations for the `text2jira` binary.

mod auth;
mod parse;
mod profile;
mod progress;
mod style;
mod submit;

pub use auth::run_auth_test;
pub use parse::run_parse;
pub use profile::{run_profile_add, run_profile_list, run_profile_remove};
pub use submit::run_submit;
