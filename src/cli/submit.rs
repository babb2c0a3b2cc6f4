//! Submit command - create tickets from an outline

use crate::cli::auth::resolve_connection;
use crate::cli::parse::{print_warnings, read_outline};
use crate::cli::progress::CliProgress;
use crate::cli::style::{spinner, Stylize};
use anstream::println;
use std::path::Path;
use text2jira::auth::CredentialArgs;
use text2jira::error::Result;
use text2jira::submit::{
    create_submission_plan, execute_submission, Phase, ProgressCallback, SubmitOptions,
};
use text2jira::tracker::create_tracker_service;

/// Run the submit command
pub async fn run_submit(
    src: &Path,
    credentials: CredentialArgs,
    profile_id: Option<&str>,
    profiles_path: &Path,
    options: &SubmitOptions,
    dry_run: bool,
) -> Result<()> {
    let parsed = read_outline(src)?;
    print_warnings(src, &parsed.warnings);

    if parsed.issues.is_empty() {
        println!("{}", "No issues found in outline - nothing to submit".muted());
        return Ok(());
    }

    let creds = resolve_connection(credentials, profile_id, profiles_path)?;
    let tracker = create_tracker_service(&creds.config)?;
    let progress = CliProgress;

    progress.on_phase(Phase::Planning).await;
    let lookup = spinner(format!("Looking up board {}", options.board_name));
    let plan = create_submission_plan(&parsed.issues, tracker.as_ref(), options).await;
    lookup.finish_and_clear();

    let plan = match plan {
        Ok(plan) => plan,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    println!(
        "Submitting {} issue{} to {} ({})",
        plan.tickets.len().accent(),
        if plan.tickets.len() == 1 { "" } else { "s" },
        plan.board.name.emphasis(),
        plan.project.key
    );
    println!();

    let result = execute_submission(&plan, tracker.as_ref(), &progress, dry_run).await?;

    if !dry_run {
        println!();
        println!(
            "Created {} issue{}",
            result.created.len().accent(),
            if result.created.len() == 1 { "" } else { "s" }
        );
        if let Some(assignment) = &result.sprint {
            println!(
                "Added {} to sprint {}",
                assignment.issue_keys.len().accent(),
                assignment.sprint.name.emphasis()
            );
        }
    }

    Ok(())
}
