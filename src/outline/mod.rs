//! Outline parsing
//!
//! Turns a hand-written outline into a tree of [`IssueRecord`]s:
//!
//! ```text
//! - Performance Improvements (X) [userA]
//!     * we're doing performance improvements on the CPU only
//!     + Cache Strategy A
//!         * generate the road
//! ```
//!
//! `-` declares a top-level issue, `+` a sub-issue of the last top-level
//! issue, `*` a description line for the most recently declared issue.
//! `(X)` flags the issue for the active sprint, a trailing `[name]` sets the
//! assignee.
//!
//! [`IssueRecord`]: crate::types::IssueRecord

mod parser;
mod summary;

pub use parser::{
    parse, parse_outline, parse_str, ParseWarning, ParsedOutline, WarningKind,
    DESCRIPTION_MARKER, SUB_ISSUE_MARKER, TOP_LEVEL_MARKER,
};
pub use summary::{clean_summary, CleanSummary, SPRINT_MARKER};
