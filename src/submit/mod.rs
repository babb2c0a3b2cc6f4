//! Two-phase submission engine
//!
//! Handles the workflow of turning parsed outline records into tickets:
//! 1. Planning - resolve board, project, components and active sprint, order the tickets
//! 2. Execution - create tickets and assign the sprint

mod execute;
mod plan;
mod progress;

pub use execute::{execute_submission, CreatedTicket, SprintAssignment, SubmissionResult};
pub use plan::{
    create_submission_plan, flatten_issues, select_sprint, SubmissionPlan, SubmitOptions,
    TicketToCreate, DEFAULT_MAX_RESULTS,
};
pub use progress::{NoopProgress, Phase, ProgressCallback};
