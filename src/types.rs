//! Core types for text2jira

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ticket parsed from an outline, with its nested sub-tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueRecord {
    /// Cleaned summary line (marker and assignee tag removed)
    pub summary: String,
    /// Accumulated `* ` fragments, each newline-terminated
    pub description: String,
    /// Assignee from a trailing `[name]` tag
    pub assignee: Option<String>,
    /// Whether the summary carried the `(X)` sprint marker
    pub add_to_sprint: bool,
    /// Child records in document order
    pub sub_issues: Vec<IssueRecord>,
}

impl IssueRecord {
    /// Create a record with no description and no children
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Total number of records in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.sub_issues.iter().map(Self::count).sum::<usize>()
    }
}

/// Jira issue type used when creating a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    /// Top-level ticket
    Task,
    /// Ticket nested under a parent
    SubTask,
}

impl IssueType {
    /// Name of the issue type as Jira expects it
    pub const fn jira_name(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::SubTask => "Sub-task",
        }
    }
}

/// An agile board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    /// Board ID
    pub id: u64,
    /// Board name as shown in Jira
    pub name: String,
    /// Name of the project the board is located in
    pub project_name: Option<String>,
}

/// A Jira project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project ID
    pub id: String,
    /// Project key (e.g. "PERF")
    pub key: String,
    /// Project display name
    pub name: String,
}

/// A project component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    /// Component ID
    pub id: String,
    /// Component name
    pub name: String,
}

/// A sprint on a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprint {
    /// Sprint ID
    pub id: u64,
    /// Sprint name
    pub name: String,
    /// Sprint state ("active", "future", "closed")
    pub state: String,
    /// When the sprint started
    pub start_date: Option<DateTime<Utc>>,
    /// When the sprint ends
    pub end_date: Option<DateTime<Utc>>,
}

impl Sprint {
    /// Whether the sprint is currently running
    pub fn is_active(&self) -> bool {
        self.state.eq_ignore_ascii_case("active")
    }
}

/// Fields for a ticket about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Key of the project the ticket goes into
    pub project_key: String,
    /// Ticket summary
    pub summary: String,
    /// Ticket description
    pub description: String,
    /// Task or sub-task
    pub issue_type: IssueType,
    /// Assignee user name
    pub assignee: Option<String>,
    /// Component IDs
    pub component_ids: Vec<String>,
    /// Key of the parent ticket (sub-tasks only)
    pub parent_key: Option<String>,
}

/// A ticket created on the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Ticket ID
    pub id: String,
    /// Ticket key (e.g. "PERF-12")
    pub key: String,
    /// Browser URL for the ticket
    pub url: String,
}

/// Connection settings for a tracker server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Server base URL
    pub server: String,
    /// User name
    pub user: String,
    /// Password or API token
    pub password: String,
}
