//! Update statement extraction and classification.

use std::sync::LazyLock;

use regex::Regex;

/// Basecamp's paragraph break. Each paragraph holds at most one statement.
const SEGMENT_SEPARATOR: &str = "<br><br>";

/// Basecamp's line break inside a paragraph.
const LINE_BREAK: &str = "<br>";

// Whitespace is spelled `[\t\n\f\r ]`: ASCII only, without `\v`. Non-breaking
// spaces are part of keys and values.
static UPDATE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\t\n\f\r ]*update[\t\n\f\r ]*:").expect("valid update marker pattern")
});

static UPDATE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ]*([^\n:]*[^\n:\t\f\r ])[\t\n\f\r ]*:[\t\n\f\r ]*(.*?)[\t\n\f\r ]*$")
        .expect("valid update item pattern")
});

static NOT_AVAILABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Nn]/?[Aa]$").expect("valid N/A pattern"));

/// One `Key: Value` statement from an update comment.
///
/// An empty `value` means the author wrote `N/A` (or a variant of it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub key: String,
    pub value: String,
}

/// What a statement does to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Historical value: becomes the key's only value, key stays "old".
    BaselineSet(String),
    /// Further new value for a key already updated in this pass. Empty values
    /// leave the key untouched.
    Append(String),
    /// First new statement for the key is `N/A`: the key disappears.
    Delete,
    /// First new value for the key: replaces everything before it.
    NewSet(String),
}

/// Extract the statements of an update comment, in document order.
///
/// Comments without the `Update:` marker yield nothing. Paragraphs that are not
/// a `Key: Value` pair, or whose value is blank, are skipped.
pub fn extract_updates(content: &str) -> Vec<UpdateStatement> {
    let Some(marker) = UPDATE_MARKER.find(content) else {
        return Vec::new();
    };

    content[marker.end()..]
        .split(SEGMENT_SEPARATOR)
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<UpdateStatement> {
    let segment = segment.replace(LINE_BREAK, "\n");
    let captures = UPDATE_ITEM.captures(&segment)?;

    let value = &captures[2];
    if value.is_empty() {
        return None;
    }

    let value = if NOT_AVAILABLE.is_match(value) {
        ""
    } else {
        value
    };

    Some(UpdateStatement {
        key: captures[1].to_string(),
        value: value.to_string(),
    })
}

/// Decide what a statement does.
///
/// `before_baseline` is true when the comment predates the last report;
/// `already_new` is true when the key already received a new value from an
/// earlier comment or statement of the same to-do.
pub fn classify(value: String, before_baseline: bool, already_new: bool) -> UpdateAction {
    if before_baseline {
        UpdateAction::BaselineSet(value)
    } else if already_new {
        UpdateAction::Append(value)
    } else if value.is_empty() {
        UpdateAction::Delete
    } else {
        UpdateAction::NewSet(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(key: &str, value: &str) -> UpdateStatement {
        UpdateStatement {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert!(UPDATE_MARKER.is_match("Update: x"));
        assert!(UPDATE_MARKER.is_match("UPDATE : x"));
        assert!(UPDATE_MARKER.is_match("  update:\nStatus: green"));
        assert!(!UPDATE_MARKER.is_match("No update: today"));
        assert!(!UPDATE_MARKER.is_match("Updated: yes"));
    }

    #[test]
    fn test_non_breaking_space_belongs_to_the_key() {
        let updates = extract_updates("Update:<br><br>Statut\u{a0}: vert");
        assert_eq!(updates, vec![statement("Statut\u{a0}", "vert")]);
    }

    #[test]
    fn test_non_breaking_space_is_kept_in_values() {
        let updates = extract_updates("Update:<br><br>Statut: vert\u{a0}");
        assert_eq!(updates, vec![statement("Statut", "vert\u{a0}")]);
    }

    #[test]
    fn test_non_breaking_space_is_not_a_blank_value() {
        let updates = extract_updates("Update:<br><br>Statut:\u{a0}");
        assert_eq!(updates, vec![statement("Statut", "\u{a0}")]);
    }

    #[test]
    fn test_non_update_comment_yields_nothing() {
        assert!(extract_updates("Status: green").is_empty());
    }

    #[test]
    fn test_paragraphs_become_statements() {
        let updates = extract_updates("Update:\nStatus: yellow<br><br>Blocker: none");
        assert_eq!(
            updates,
            vec![statement("Status", "yellow"), statement("Blocker", "none")]
        );
    }

    #[test]
    fn test_line_breaks_are_normalised() {
        let updates = extract_updates("Update:<br>Status: green");
        assert_eq!(updates, vec![statement("Status", "green")]);
    }

    #[test]
    fn test_key_and_value_are_trimmed() {
        let updates = extract_updates("Update:<br><br>  Next step  :   ship it  ");
        assert_eq!(updates, vec![statement("Next step", "ship it")]);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let updates = extract_updates("Update:<br><br>Meeting: 10:30");
        assert_eq!(updates, vec![statement("Meeting", "10:30")]);
    }

    #[test]
    fn test_malformed_paragraphs_are_skipped() {
        let updates = extract_updates("Update:<br><br>just text<br><br>: orphan<br><br>Risk: low");
        assert_eq!(updates, vec![statement("Risk", "low")]);
    }

    #[test]
    fn test_multi_line_paragraph_is_skipped() {
        let updates = extract_updates("Update:<br><br>Status: green<br>Risk: low");
        assert!(updates.is_empty());
    }

    #[test]
    fn test_blank_value_is_skipped() {
        let updates = extract_updates("Update:<br><br>Status:   <br><br>Risk: low");
        assert_eq!(updates, vec![statement("Risk", "low")]);
    }

    #[test]
    fn test_not_available_variants_become_empty() {
        for na in ["N/A", "n/a", "NA", "na", "Na", "nA", "N/a"] {
            let updates = extract_updates(&format!("Update:<br><br>Blocker: {}", na));
            assert_eq!(updates, vec![statement("Blocker", "")], "value {:?}", na);
        }
    }

    #[test]
    fn test_none_is_not_not_available() {
        let updates = extract_updates("Update:<br><br>Blocker: none");
        assert_eq!(updates, vec![statement("Blocker", "none")]);
        let updates = extract_updates("Update:<br><br>Blocker: N/A/A");
        assert_eq!(updates, vec![statement("Blocker", "N/A/A")]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("x".into(), true, false),
            UpdateAction::BaselineSet("x".into())
        );
        assert_eq!(
            classify("x".into(), true, true),
            UpdateAction::BaselineSet("x".into())
        );
        assert_eq!(
            classify("".into(), false, true),
            UpdateAction::Append("".into())
        );
        assert_eq!(classify("".into(), false, false), UpdateAction::Delete);
        assert_eq!(
            classify("y".into(), false, false),
            UpdateAction::NewSet("y".into())
        );
    }
}
