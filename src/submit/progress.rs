//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, etc.) to receive
//! progress updates during submission.

use crate::error::Error;
use crate::submit::TicketToCreate;
use crate::types::{CreatedIssue, Sprint};
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving board, project, components and sprint
    Planning,
    /// Creating tickets
    Creating,
    /// Moving flagged tickets into the active sprint
    AssigningSprint,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Planning => "Resolving board",
            Self::Creating => "Creating issues",
            Self::AssigningSprint => "Assigning sprint",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called after a ticket was created
    async fn on_issue_created(&self, ticket: &TicketToCreate, issue: &CreatedIssue);

    /// Called after tickets were moved into a sprint
    async fn on_sprint_assigned(&self, sprint: &Sprint, issue_keys: &[String]);

    /// Called when an error occurs
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_issue_created(&self, _ticket: &TicketToCreate, _issue: &CreatedIssue) {}
    async fn on_sprint_assigned(&self, _sprint: &Sprint, _issue_keys: &[String]) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
