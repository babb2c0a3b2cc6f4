//! Tracker service factory

use crate::error::Result;
use crate::tracker::{JiraService, TrackerService};
use crate::types::TrackerConfig;

/// Create a tracker service from resolved credentials
pub fn create_tracker_service(config: &TrackerConfig) -> Result<Box<dyn TrackerService>> {
    Ok(Box::new(JiraService::new(config.clone())?))
}
