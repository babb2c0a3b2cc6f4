//! Mock tracker service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use text2jira::error::{Error, Result};
use text2jira::tracker::TrackerService;
use text2jira::types::{Board, Component, CreatedIssue, NewIssue, Project, Sprint, TrackerConfig};

/// Call record for `list_sprints`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSprintsCall {
    pub board_id: u64,
    pub max_results: u32,
}

/// Call record for `add_issues_to_sprint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToSprintCall {
    pub sprint_id: u64,
    pub issue_keys: Vec<String>,
}

/// Hand-written tracker mock
///
/// Features:
/// - Auto-incrementing issue keys (`PERF-1`, `PERF-2`, ...)
/// - Configurable boards, projects, components and sprints
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockTrackerService {
    config: TrackerConfig,
    key_prefix: String,
    next_issue_number: AtomicU64,
    boards: Mutex<Vec<Board>>,
    projects: Mutex<Vec<Project>>,
    components: Mutex<Vec<Component>>,
    sprints: Mutex<Vec<Sprint>>,
    // Call tracking
    list_boards_calls: AtomicU64,
    list_components_calls: Mutex<Vec<String>>,
    create_issue_calls: Mutex<Vec<NewIssue>>,
    list_sprints_calls: Mutex<Vec<ListSprintsCall>>,
    add_to_sprint_calls: Mutex<Vec<AddToSprintCall>>,
    // Error injection
    error_on_create_issue: Mutex<Option<(usize, String)>>,
    error_on_add_to_sprint: Mutex<Option<String>>,
}

impl MockTrackerService {
    /// Create an empty mock issuing keys with the given project prefix
    pub fn new(key_prefix: &str) -> Self {
        Self {
            config: super::fixtures::tracker_config(),
            key_prefix: key_prefix.to_string(),
            next_issue_number: AtomicU64::new(1),
            boards: Mutex::new(Vec::new()),
            projects: Mutex::new(Vec::new()),
            components: Mutex::new(Vec::new()),
            sprints: Mutex::new(Vec::new()),
            list_boards_calls: AtomicU64::new(0),
            list_components_calls: Mutex::new(Vec::new()),
            create_issue_calls: Mutex::new(Vec::new()),
            list_sprints_calls: Mutex::new(Vec::new()),
            add_to_sprint_calls: Mutex::new(Vec::new()),
            error_on_create_issue: Mutex::new(None),
            error_on_add_to_sprint: Mutex::new(None),
        }
    }

    /// Mock with one board located in one project
    pub fn with_board(board: Board, project: Project) -> Self {
        let mock = Self::new(&project.key);
        mock.boards.lock().unwrap().push(board);
        mock.projects.lock().unwrap().push(project);
        mock
    }

    pub fn add_board(&self, board: Board) {
        self.boards.lock().unwrap().push(board);
    }

    pub fn add_project(&self, project: Project) {
        self.projects.lock().unwrap().push(project);
    }

    pub fn set_components(&self, components: Vec<Component>) {
        *self.components.lock().unwrap() = components;
    }

    pub fn set_sprints(&self, sprints: Vec<Sprint>) {
        *self.sprints.lock().unwrap() = sprints;
    }

    // === Error injection methods ===

    /// Make the `nth` (zero-based) `create_issue` call fail
    pub fn fail_create_issue_at(&self, nth: usize, msg: &str) {
        *self.error_on_create_issue.lock().unwrap() = Some((nth, msg.to_string()));
    }

    /// Make `add_issues_to_sprint` fail
    pub fn fail_add_to_sprint(&self, msg: &str) {
        *self.error_on_add_to_sprint.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    pub fn list_boards_count(&self) -> u64 {
        self.list_boards_calls.load(Ordering::SeqCst)
    }

    pub fn get_list_components_calls(&self) -> Vec<String> {
        self.list_components_calls.lock().unwrap().clone()
    }

    pub fn get_create_issue_calls(&self) -> Vec<NewIssue> {
        self.create_issue_calls.lock().unwrap().clone()
    }

    pub fn get_list_sprints_calls(&self) -> Vec<ListSprintsCall> {
        self.list_sprints_calls.lock().unwrap().clone()
    }

    pub fn get_add_to_sprint_calls(&self) -> Vec<AddToSprintCall> {
        self.add_to_sprint_calls.lock().unwrap().clone()
    }

    /// Assert that an issue with this summary was created under `parent`
    pub fn assert_created_under(&self, summary: &str, parent: Option<&str>) {
        let calls = self.get_create_issue_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.summary == summary && c.parent_key.as_deref() == parent),
            "Expected create_issue({summary}, parent {parent:?}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl TrackerService for MockTrackerService {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        self.list_boards_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.boards.lock().unwrap().clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn list_components(&self, project_key: &str) -> Result<Vec<Component>> {
        self.list_components_calls
            .lock()
            .unwrap()
            .push(project_key.to_string());
        Ok(self.components.lock().unwrap().clone())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let index = {
            let mut calls = self.create_issue_calls.lock().unwrap();
            calls.push(issue.clone());
            calls.len() - 1
        };

        // Check for injected error
        if let Some((nth, msg)) = self.error_on_create_issue.lock().unwrap().as_ref() {
            if *nth == index {
                return Err(Error::TrackerApi(msg.clone()));
            }
        }

        let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}-{number}", self.key_prefix);
        Ok(CreatedIssue {
            id: (10_000 + number).to_string(),
            url: format!("https://jira.example.com/browse/{key}"),
            key,
        })
    }

    async fn list_sprints(&self, board_id: u64, max_results: u32) -> Result<Vec<Sprint>> {
        self.list_sprints_calls
            .lock()
            .unwrap()
            .push(ListSprintsCall {
                board_id,
                max_results,
            });
        Ok(self.sprints.lock().unwrap().clone())
    }

    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<()> {
        self.add_to_sprint_calls
            .lock()
            .unwrap()
            .push(AddToSprintCall {
                sprint_id,
                issue_keys: issue_keys.to_vec(),
            });

        if let Some(msg) = self.error_on_add_to_sprint.lock().unwrap().as_ref() {
            return Err(Error::TrackerApi(msg.clone()));
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<String> {
        Ok(self.config.user.clone())
    }

    fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
