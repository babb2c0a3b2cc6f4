//! Parse command - preview the issue tree an outline produces

use crate::cli::style::{arrow, bullet, Stylize};
use anstream::{eprintln, println};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use text2jira::error::Result;
use text2jira::outline::{parse_str, ParseWarning, ParsedOutline};
use text2jira::types::IssueRecord;

/// Read and parse an outline file
pub fn read_outline(src: &Path) -> Result<ParsedOutline> {
    let text = fs::read_to_string(src)?;
    Ok(parse_str(&text))
}

/// Print skipped lines to stderr
pub fn print_warnings(src: &Path, warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!(
            "{}: {}:{}: {}",
            "warning".warn(),
            src.display(),
            warning.line.accent().for_stderr(),
            warning.kind
        );
    }
}

/// Run the parse command
pub fn run_parse(src: &Path, json: bool) -> Result<()> {
    let parsed = read_outline(src)?;
    print_warnings(src, &parsed.warnings);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed.issues)?);
        return Ok(());
    }

    if parsed.issues.is_empty() {
        println!("{}", "No issues found".muted());
        println!();
        println!(
            "{}",
            "Start a line with '-' for an issue, '+' for a sub-task, '*' for a description."
                .muted()
        );
        return Ok(());
    }

    let total: usize = parsed.issues.iter().map(IssueRecord::count).sum();
    println!(
        "{} {}",
        "Issues".emphasis(),
        format!("({} top-level, {total} total)", parsed.issues.len()).muted()
    );
    println!();

    for issue in &parsed.issues {
        print_record(issue, 0);
    }

    Ok(())
}

fn print_record(record: &IssueRecord, depth: usize) {
    let indent = "    ".repeat(depth);
    let marker = if depth == 0 {
        bullet().to_string()
    } else {
        arrow().to_string()
    };

    let mut tags = String::new();
    if let Some(assignee) = &record.assignee {
        let _ = write!(tags, " @{assignee}");
    }
    if record.add_to_sprint {
        tags.push_str(" [sprint]");
    }

    println!("{indent}{marker} {}{}", record.summary.emphasis(), tags.accent());
    for line in record.description.lines() {
        println!("{indent}    {}", line.muted());
    }

    for child in &record.sub_issues {
        print_record(child, depth + 1);
    }
}
