//! Phase 1: Submission planning
//!
//! Resolves the board, its project, the requested components and (when a
//! ticket is flagged) the active sprint, then flattens the parsed issue tree
//! into the ordered list of tickets to create. Nothing is written to the
//! tracker here.

use crate::error::{Error, Result};
use crate::tracker::TrackerService;
use crate::types::{Board, IssueRecord, IssueType, Project, Sprint};
use tracing::debug;

/// Default page size when listing sprints
pub const DEFAULT_MAX_RESULTS: u32 = 100_000;

/// What the caller asked for
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    /// Name of the board to file tickets against
    pub board_name: String,
    /// Assignee for records without an inline `[name]` tag
    pub default_assignee: Option<String>,
    /// Component names applied to every ticket
    pub components: Vec<String>,
    /// Page size when listing sprints
    pub max_results: u32,
}

impl SubmitOptions {
    /// Options for a board with no assignee and no components
    pub fn new(board_name: impl Into<String>) -> Self {
        Self {
            board_name: board_name.into(),
            default_assignee: None,
            components: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// A ticket that needs to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketToCreate {
    /// Index path of the record in the parsed tree (`[0, 2]` = third child of first issue)
    pub path: Vec<usize>,
    /// Ticket summary
    pub summary: String,
    /// Ticket description
    pub description: String,
    /// Task for top-level records, sub-task below
    pub issue_type: IssueType,
    /// Resolved assignee
    pub assignee: Option<String>,
    /// Whether this ticket goes into the active sprint
    pub add_to_sprint: bool,
}

impl TicketToCreate {
    /// Path of the parent ticket, if any
    pub fn parent_path(&self) -> Option<&[usize]> {
        match self.path.len() {
            0 | 1 => None,
            n => Some(&self.path[..n - 1]),
        }
    }

    /// Nesting depth (0 for top-level tickets)
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Submission plan
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    /// Board tickets are filed against
    pub board: Board,
    /// Project behind the board
    pub project: Project,
    /// Resolved component IDs
    pub component_ids: Vec<String>,
    /// Tickets in creation order (parents before children)
    pub tickets: Vec<TicketToCreate>,
    /// Active sprint for flagged tickets; `None` when nothing is flagged
    pub sprint: Option<Sprint>,
}

/// Create a submission plan
///
/// Fails with a named error when the board, its project or any component
/// cannot be found, or when a ticket is flagged and the board has no active
/// sprint.
pub async fn create_submission_plan(
    issues: &[IssueRecord],
    tracker: &dyn TrackerService,
    options: &SubmitOptions,
) -> Result<SubmissionPlan> {
    let board = tracker
        .list_boards()
        .await?
        .into_iter()
        .find(|b| b.name == options.board_name)
        .ok_or_else(|| Error::BoardNotFound(options.board_name.clone()))?;
    debug!("Resolved board {} ({})", board.name, board.id);

    let project_name = board
        .project_name
        .clone()
        .ok_or_else(|| Error::ProjectNotFound(format!("location of board '{}'", board.name)))?;

    let project = tracker
        .list_projects()
        .await?
        .into_iter()
        .find(|p| project_matches(p, &project_name))
        .ok_or_else(|| Error::ProjectNotFound(project_name.clone()))?;
    debug!("Resolved project {} ({})", project.name, project.key);

    let mut component_ids = Vec::new();
    if !options.components.is_empty() {
        let available = tracker.list_components(&project.key).await?;
        for name in &options.components {
            let component = available
                .iter()
                .find(|c| &c.name == name)
                .ok_or_else(|| Error::ComponentNotFound(name.clone()))?;
            component_ids.push(component.id.clone());
        }
    }

    let tickets = flatten_issues(issues, options.default_assignee.as_deref());

    let sprint = if tickets.iter().any(|t| t.add_to_sprint) {
        let sprints = tracker.list_sprints(board.id, options.max_results).await?;
        let sprint = select_sprint(&sprints)
            .cloned()
            .ok_or_else(|| Error::NoActiveSprint(board.name.clone()))?;
        debug!("Resolved sprint {} ({})", sprint.name, sprint.id);
        Some(sprint)
    } else {
        None
    };

    Ok(SubmissionPlan {
        board,
        project,
        component_ids,
        tickets,
        sprint,
    })
}

/// Pick the sprint flagged tickets go into
///
/// Only an active sprint qualifies; with several, the last one listed wins.
pub fn select_sprint(sprints: &[Sprint]) -> Option<&Sprint> {
    sprints.iter().rev().find(|s| s.is_active())
}

/// Board locations name the project either plainly or as `Name (KEY)`
fn project_matches(project: &Project, location: &str) -> bool {
    project.name == location || format!("{} ({})", project.name, project.key) == location
}

/// Flatten the record tree depth-first so parents precede their children
///
/// Only top-level records carry the sprint flag.
pub fn flatten_issues(
    issues: &[IssueRecord],
    default_assignee: Option<&str>,
) -> Vec<TicketToCreate> {
    let mut tickets = Vec::new();
    let mut path = Vec::new();
    for (idx, issue) in issues.iter().enumerate() {
        path.push(idx);
        flatten_into(issue, &mut path, default_assignee, &mut tickets);
        path.pop();
    }
    tickets
}

fn flatten_into(
    issue: &IssueRecord,
    path: &mut Vec<usize>,
    default_assignee: Option<&str>,
    tickets: &mut Vec<TicketToCreate>,
) {
    let top_level = path.len() == 1;
    tickets.push(TicketToCreate {
        path: path.clone(),
        summary: issue.summary.clone(),
        description: issue.description.clone(),
        issue_type: if top_level {
            IssueType::Task
        } else {
            IssueType::SubTask
        },
        assignee: issue
            .assignee
            .clone()
            .or_else(|| default_assignee.map(String::from)),
        add_to_sprint: top_level && issue.add_to_sprint,
    });

    for (idx, child) in issue.sub_issues.iter().enumerate() {
        path.push(idx);
        flatten_into(child, path, default_assignee, tickets);
        path.pop();
    }
}
