//! Tracker services
//!
//! Provides the interface the submission engine uses to talk to the issue
//! tracker, plus the Jira REST implementation.

mod factory;
mod jira;

pub use factory::create_tracker_service;
pub use jira::JiraService;

use crate::error::Result;
use crate::types::{Board, Component, CreatedIssue, NewIssue, Project, Sprint, TrackerConfig};
use async_trait::async_trait;

/// Tracker service trait for board lookup and ticket creation
///
/// The submission logic only talks to this trait, so tests can swap in a
/// recording mock instead of a live server.
#[async_trait]
pub trait TrackerService: Send + Sync {
    /// List every board visible to the user
    async fn list_boards(&self) -> Result<Vec<Board>>;

    /// List every project visible to the user
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// List the components of a project
    async fn list_components(&self, project_key: &str) -> Result<Vec<Component>>;

    /// Create a single ticket
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue>;

    /// List the open (active and future) sprints of a board
    async fn list_sprints(&self, board_id: u64, max_results: u32) -> Result<Vec<Sprint>>;

    /// Move tickets into a sprint
    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<()>;

    /// Name of the authenticated user
    async fn current_user(&self) -> Result<String>;

    /// Get the connection configuration
    fn config(&self) -> &TrackerConfig;
}
