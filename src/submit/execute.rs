//! Phase 2: Submission execution
//!
//! Creates the planned tickets, parents before children, then moves the
//! flagged top-level tickets into the sprint chosen while planning.

use crate::error::{Error, Result};
use crate::submit::{Phase, ProgressCallback, SubmissionPlan, TicketToCreate};
use crate::tracker::TrackerService;
use crate::types::{CreatedIssue, NewIssue, Sprint};
use std::collections::HashMap;
use tracing::debug;

/// A planned ticket together with what the tracker returned for it
#[derive(Debug, Clone)]
pub struct CreatedTicket {
    /// The planned ticket
    pub ticket: TicketToCreate,
    /// The created issue
    pub issue: CreatedIssue,
}

/// Tickets moved into a sprint
#[derive(Debug, Clone)]
pub struct SprintAssignment {
    /// Target sprint
    pub sprint: Sprint,
    /// Keys added to it
    pub issue_keys: Vec<String>,
}

/// Result of submission execution
#[derive(Debug, Clone, Default)]
pub struct SubmissionResult {
    /// Tickets created, in creation order
    pub created: Vec<CreatedTicket>,
    /// Sprint assignment, if any ticket was flagged
    pub sprint: Option<SprintAssignment>,
}

/// Execute a submission plan
///
/// Any tracker failure is passed to [`ProgressCallback::on_error`], aborts
/// the run and is returned unchanged; tickets created before the failure
/// stay on the tracker. A plan with flagged tickets but no sprint is
/// rejected before anything is created.
pub async fn execute_submission(
    plan: &SubmissionPlan,
    tracker: &dyn TrackerService,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<SubmissionResult> {
    let mut result = SubmissionResult::default();

    if dry_run {
        progress
            .on_message("Dry run - no changes will be made")
            .await;
        report_dry_run(plan, progress).await;
        return Ok(result);
    }

    if plan.sprint.is_none() && plan.tickets.iter().any(|t| t.add_to_sprint) {
        let e = Error::NoActiveSprint(plan.board.name.clone());
        progress.on_error(&e).await;
        return Err(e);
    }

    progress.on_phase(Phase::Creating).await;

    let mut keys_by_path: HashMap<Vec<usize>, String> = HashMap::new();
    for ticket in &plan.tickets {
        let parent_key = match ticket.parent_path() {
            Some(parent) => Some(keys_by_path.get(parent).cloned().ok_or_else(|| {
                Error::Internal(format!("parent of '{}' was not created", ticket.summary))
            })?),
            None => None,
        };

        let new_issue = NewIssue {
            project_key: plan.project.key.clone(),
            summary: ticket.summary.clone(),
            description: ticket.description.clone(),
            issue_type: ticket.issue_type,
            assignee: ticket.assignee.clone(),
            component_ids: plan.component_ids.clone(),
            parent_key,
        };

        let issue = match tracker.create_issue(&new_issue).await {
            Ok(issue) => issue,
            Err(e) => {
                progress.on_error(&e).await;
                return Err(e);
            }
        };

        debug!("Created {} for '{}'", issue.key, ticket.summary);
        progress.on_issue_created(ticket, &issue).await;
        keys_by_path.insert(ticket.path.clone(), issue.key.clone());
        result.created.push(CreatedTicket {
            ticket: ticket.clone(),
            issue,
        });
    }

    let flagged: Vec<String> = result
        .created
        .iter()
        .filter(|c| c.ticket.add_to_sprint)
        .map(|c| c.issue.key.clone())
        .collect();

    if !flagged.is_empty() {
        progress.on_phase(Phase::AssigningSprint).await;

        let Some(sprint) = plan.sprint.clone() else {
            return Err(Error::Internal("sprint vanished from plan".to_string()));
        };

        if let Err(e) = tracker.add_issues_to_sprint(sprint.id, &flagged).await {
            progress.on_error(&e).await;
            return Err(e);
        }

        progress.on_sprint_assigned(&sprint, &flagged).await;
        result.sprint = Some(SprintAssignment {
            sprint,
            issue_keys: flagged,
        });
    }

    progress.on_phase(Phase::Complete).await;

    Ok(result)
}

/// Report what would be done in a dry run
async fn report_dry_run(plan: &SubmissionPlan, progress: &dyn ProgressCallback) {
    if plan.tickets.is_empty() {
        progress.on_message("Nothing to do - outline has no issues").await;
        return;
    }

    progress
        .on_message(&format!(
            "Would create in {} ({}):",
            plan.project.name, plan.project.key
        ))
        .await;

    for ticket in &plan.tickets {
        let indent = "  ".repeat(ticket.depth() + 1);
        let assignee = ticket
            .assignee
            .as_deref()
            .map(|a| format!(" [{a}]"))
            .unwrap_or_default();
        let sprint = if ticket.add_to_sprint { " (sprint)" } else { "" };
        progress
            .on_message(&format!(
                "{indent}- {}: {}{assignee}{sprint}",
                ticket.issue_type.jira_name(),
                ticket.summary
            ))
            .await;
    }

    if let Some(sprint) = &plan.sprint {
        progress
            .on_message(&format!(
                "Would add flagged issues to sprint '{}' of board '{}'",
                sprint.name, plan.board.name
            ))
            .await;
    }
}
