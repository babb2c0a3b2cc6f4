//! Summary line clean-up: sprint marker and assignee tag extraction

use regex::Regex;
use std::sync::OnceLock;

/// Literal token that flags a ticket for the active sprint
pub const SPRINT_MARKER: &str = "(X)";

/// A summary with its inline tags pulled out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    /// Remaining text, whitespace collapsed and trimmed
    pub text: String,
    /// Inner text of a trailing `[name]` tag
    pub assignee: Option<String>,
    /// Whether [`SPRINT_MARKER`] appeared anywhere
    pub add_to_sprint: bool,
}

/// Trailing `[name]` tag, allowing trailing whitespace after it.
fn assignee_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\[\]]+)\]\s*$").expect("hardcoded assignee pattern is valid")
    })
}

/// Strip the sprint marker and trailing assignee tag from a raw summary
///
/// The marker is removed first so `Title [user] (X)` still yields `user`.
/// Brackets that are not at the very end (`[Optional] Title`) are kept.
pub fn clean_summary(raw: &str) -> CleanSummary {
    let add_to_sprint = raw.contains(SPRINT_MARKER);
    let mut text = raw.replace(SPRINT_MARKER, " ");

    let tag = assignee_tag().captures(&text).and_then(|caps| {
        let start = caps.get(0)?.start();
        let name = caps[1].trim().to_string();
        (!name.is_empty()).then_some((start, name))
    });

    let assignee = tag.map(|(start, name)| {
        text.truncate(start);
        name
    });

    CleanSummary {
        text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        assignee,
        add_to_sprint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_summary() {
        let s = clean_summary("Profile Textures");
        assert_eq!(s.text, "Profile Textures");
        assert_eq!(s.assignee, None);
        assert!(!s.add_to_sprint);
    }

    #[test]
    fn test_marker_and_assignee() {
        let s = clean_summary("Performance Improvements (X) [userA]");
        assert_eq!(s.text, "Performance Improvements");
        assert_eq!(s.assignee.as_deref(), Some("userA"));
        assert!(s.add_to_sprint);
    }

    #[test]
    fn test_marker_after_assignee() {
        let s = clean_summary("Cache Road [userB] (X)");
        assert_eq!(s.text, "Cache Road");
        assert_eq!(s.assignee.as_deref(), Some("userB"));
        assert!(s.add_to_sprint);
    }

    #[test]
    fn test_marker_in_middle_collapses_whitespace() {
        let s = clean_summary("Cache (X)   Strategy");
        assert_eq!(s.text, "Cache Strategy");
        assert!(s.add_to_sprint);
    }

    #[test]
    fn test_leading_bracket_is_not_assignee() {
        let s = clean_summary("[Optional] Run synthesis non blocking");
        assert_eq!(s.text, "[Optional] Run synthesis non blocking");
        assert_eq!(s.assignee, None);
    }

    #[test]
    fn test_trailing_whitespace_after_tag() {
        let s = clean_summary("Cache Textures [userB]\t\t");
        assert_eq!(s.text, "Cache Textures");
        assert_eq!(s.assignee.as_deref(), Some("userB"));
    }

    #[test]
    fn test_blank_tag_is_kept() {
        let s = clean_summary("Odd [ ]");
        assert_eq!(s.text, "Odd [ ]");
        assert_eq!(s.assignee, None);
    }

    #[test]
    fn test_only_tags_leaves_empty_text() {
        let s = clean_summary("(X) [userA]");
        assert!(s.text.is_empty());
        assert_eq!(s.assignee.as_deref(), Some("userA"));
    }
}
