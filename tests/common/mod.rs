//! Shared test helpers

pub mod fixtures;
pub mod mock_tracker;
pub mod recording_progress;

pub use fixtures::*;
pub use mock_tracker::MockTrackerService;
pub use recording_progress::RecordingProgress;
