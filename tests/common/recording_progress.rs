//! Progress callback that records what it was told

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use text2jira::error::Error;
use text2jira::submit::{Phase, ProgressCallback, TicketToCreate};
use text2jira::types::{CreatedIssue, Sprint};

#[derive(Default)]
pub struct RecordingProgress {
    phases: Mutex<Vec<Phase>>,
    created: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn created_keys(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// Error messages in the order they were reported
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_issue_created(&self, _ticket: &TicketToCreate, issue: &CreatedIssue) {
        self.created.lock().unwrap().push(issue.key.clone());
    }

    async fn on_sprint_assigned(&self, _sprint: &Sprint, _issue_keys: &[String]) {}

    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
