//! CLI progress callback with styled output

use crate::cli::style::{check, cross, hyperlink, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use text2jira::error::Error;
use text2jira::submit::{Phase, ProgressCallback, TicketToCreate};
use text2jira::types::{CreatedIssue, Sprint};

/// CLI progress callback that prints to stdout with styled output
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{}", phase.to_string().success()),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_issue_created(&self, ticket: &TicketToCreate, issue: &CreatedIssue) {
        let indent = "  ".repeat(ticket.depth() + 1);
        println!(
            "{indent}{} {} {}",
            check(),
            hyperlink(Stream::Stdout, &issue.key, &issue.url).accent(),
            ticket.summary.emphasis()
        );
    }

    async fn on_sprint_assigned(&self, sprint: &Sprint, issue_keys: &[String]) {
        println!(
            "  {} Added {} to {}",
            check(),
            issue_keys.join(", ").accent(),
            sprint.name.emphasis()
        );
    }

    async fn on_error(&self, err: &Error) {
        eprintln!("{} {}: {}", cross(), "error".error(), err);
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
