//! Test data factories for text2jira types

#![allow(dead_code)]

use text2jira::types::{Board, Component, Project, Sprint, TrackerConfig};

/// Connection settings pointing at a fake server
pub fn tracker_config() -> TrackerConfig {
    TrackerConfig {
        server: "https://jira.example.com".to_string(),
        user: "tester".to_string(),
        password: "secret".to_string(),
    }
}

/// Create a board located in the named project
pub fn make_board(id: u64, name: &str, project_name: &str) -> Board {
    Board {
        id,
        name: name.to_string(),
        project_name: Some(project_name.to_string()),
    }
}

/// Create a project with a derived ID
pub fn make_project(key: &str, name: &str) -> Project {
    Project {
        id: format!("{key}-id"),
        key: key.to_string(),
        name: name.to_string(),
    }
}

pub fn make_component(id: &str, name: &str) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Create a sprint in the given state (`active`, `future`, ...)
pub fn make_sprint(id: u64, name: &str, state: &str) -> Sprint {
    Sprint {
        id,
        name: name.to_string(),
        state: state.to_string(),
        start_date: None,
        end_date: None,
    }
}
