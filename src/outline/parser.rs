//! Line-prefix driven outline parser
//!
//! A single forward pass with O(1) state. Indentation carries no meaning;
//! only the first non-blank character of each line does.

use crate::outline::summary::clean_summary;
use crate::types::IssueRecord;
use std::fmt;
use tracing::{debug, warn};

/// Declares a top-level issue
pub const TOP_LEVEL_MARKER: char = '-';
/// Declares a sub-issue of the current top-level issue
pub const SUB_ISSUE_MARKER: char = '+';
/// Declares a description fragment for the current issue
pub const DESCRIPTION_MARKER: char = '*';

/// Why a line was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// `*` line with no issue declared before it
    OrphanDescription,
    /// `+` line with no top-level issue declared before it
    OrphanSubIssue,
    /// `-` or `+` line whose summary is empty once tags are removed
    EmptySummary,
    /// Line starting with none of the known markers
    UnrecognizedLine(String),
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanDescription => write!(f, "description line has no issue to attach to"),
            Self::OrphanSubIssue => write!(f, "sub-issue line has no parent issue"),
            Self::EmptySummary => write!(f, "issue line has an empty summary"),
            Self::UnrecognizedLine(text) => write!(f, "unrecognized line: {text:?}"),
        }
    }
}

/// A non-fatal problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number
    pub line: usize,
    /// What went wrong
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Parsed issues plus every skipped line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOutline {
    /// Top-level records in document order
    pub issues: Vec<IssueRecord>,
    /// Skipped lines in document order
    pub warnings: Vec<ParseWarning>,
}

/// Where the scan currently attaches things.
///
/// Both fields are index paths into the result tree: `[i]` is the i-th
/// top-level record, `[i, j]` its j-th child.
#[derive(Debug, Default)]
struct ScanState {
    current_top_level: Option<usize>,
    current_target: Option<Vec<usize>>,
}

struct Scanner {
    state: ScanState,
    out: ParsedOutline,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: ScanState::default(),
            out: ParsedOutline::default(),
        }
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        let warning = ParseWarning { line, kind };
        warn!("{warning}");
        self.out.warnings.push(warning);
    }

    fn record_at_mut(&mut self, path: &[usize]) -> Option<&mut IssueRecord> {
        let (first, rest) = path.split_first()?;
        let mut record = self.out.issues.get_mut(*first)?;
        for idx in rest {
            record = record.sub_issues.get_mut(*idx)?;
        }
        Some(record)
    }

    fn feed(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        let mut chars = line.chars();
        let Some(marker) = chars.next() else {
            return;
        };
        let text = chars.as_str().trim();

        match marker {
            TOP_LEVEL_MARKER => self.top_level(line_no, text),
            SUB_ISSUE_MARKER => self.sub_issue(line_no, text),
            DESCRIPTION_MARKER => self.description(line_no, text),
            _ => self.warn(line_no, WarningKind::UnrecognizedLine(line.to_string())),
        }
    }

    fn build_record(&mut self, line_no: usize, text: &str) -> Option<IssueRecord> {
        let clean = clean_summary(text);
        if clean.text.is_empty() {
            self.warn(line_no, WarningKind::EmptySummary);
            return None;
        }
        Some(IssueRecord {
            summary: clean.text,
            description: String::new(),
            assignee: clean.assignee,
            add_to_sprint: clean.add_to_sprint,
            sub_issues: Vec::new(),
        })
    }

    fn top_level(&mut self, line_no: usize, text: &str) {
        let Some(record) = self.build_record(line_no, text) else {
            // Children of a skipped issue must not land on an earlier one.
            self.state = ScanState::default();
            return;
        };

        debug!(line = line_no, summary = %record.summary, "top-level issue");
        let idx = self.out.issues.len();
        self.out.issues.push(record);
        self.state.current_top_level = Some(idx);
        self.state.current_target = Some(vec![idx]);
    }

    fn sub_issue(&mut self, line_no: usize, text: &str) {
        let Some(parent_idx) = self.state.current_top_level else {
            self.warn(line_no, WarningKind::OrphanSubIssue);
            self.state.current_target = None;
            return;
        };
        let Some(record) = self.build_record(line_no, text) else {
            self.state.current_target = None;
            return;
        };

        debug!(line = line_no, summary = %record.summary, "sub-issue");
        let Some(parent) = self.out.issues.get_mut(parent_idx) else {
            self.state = ScanState::default();
            return;
        };
        let child_idx = parent.sub_issues.len();
        parent.sub_issues.push(record);
        self.state.current_target = Some(vec![parent_idx, child_idx]);
    }

    fn description(&mut self, line_no: usize, text: &str) {
        let target = self.state.current_target.clone();
        match target.and_then(|path| self.record_at_mut(&path)) {
            Some(record) => {
                record.description.push_str("* ");
                record.description.push_str(text);
                record.description.push('\n');
            }
            None => self.warn(line_no, WarningKind::OrphanDescription),
        }
    }
}

/// Parse outline lines, keeping the warnings for skipped lines
///
/// Never fails: malformed lines are skipped, logged and recorded in
/// [`ParsedOutline::warnings`].
pub fn parse_outline<I, S>(lines: I) -> ParsedOutline
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new();
    for (idx, line) in lines.into_iter().enumerate() {
        scanner.feed(idx + 1, line.as_ref());
    }

    debug!(
        issues = scanner.out.issues.len(),
        warnings = scanner.out.warnings.len(),
        "outline parsed"
    );
    scanner.out
}

/// Parse outline lines into top-level issue records
pub fn parse<I, S>(lines: I) -> Vec<IssueRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_outline(lines).issues
}

/// Parse a whole outline document
///
/// A leading UTF-8 byte order mark is ignored.
pub fn parse_str(text: &str) -> ParsedOutline {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    parse_outline(text.lines())
}
