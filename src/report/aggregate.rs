//! Folding a to-do's comment thread into a report.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use super::extract::{classify, extract_updates, UpdateAction};
use crate::models::{Comment, Todo};

/// Latest values per key.
///
/// A key present in the report always has at least one value.
pub type Report = BTreeMap<String, Vec<String>>;

/// Aggregation state for one to-do.
///
/// Keys in `new_keys` already received a value at or after the baseline, so
/// further values append instead of replacing.
#[derive(Debug, Default)]
pub struct ReportState {
    report: Report,
    new_keys: HashSet<String>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every statement of one comment.
    pub fn ingest(&mut self, content: &str, before_baseline: bool) {
        for statement in extract_updates(content) {
            let already_new = self.is_new(&statement.key);
            let action = classify(statement.value, before_baseline, already_new);
            self.apply(statement.key, action);
        }
    }

    /// Apply one classified action to `key`.
    pub fn apply(&mut self, key: String, action: UpdateAction) {
        match action {
            UpdateAction::BaselineSet(value) => {
                self.report.insert(key, vec![value]);
            }
            UpdateAction::Append(value) => {
                if !value.is_empty() {
                    self.report.entry(key).or_default().push(value);
                }
            }
            UpdateAction::Delete => {
                self.report.remove(&key);
            }
            UpdateAction::NewSet(value) => {
                self.report.insert(key.clone(), vec![value]);
                self.new_keys.insert(key);
            }
        }
    }

    pub fn is_new(&self, key: &str) -> bool {
        self.new_keys.contains(key)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}

/// Summary of one to-do, ready to print.
#[derive(Debug, Clone)]
pub struct TodoReport {
    pub todo_id: u64,
    pub content: String,
    pub assignee: String,
    /// All comments on the to-do.
    pub comment_count: usize,
    /// Comments posted at or after the baseline.
    pub new_messages: usize,
    pub entries: Report,
}

/// Fold comments, in the order given, into a report.
///
/// Returns the report and the number of comments at or after `since`.
pub fn aggregate_comments<'a, I>(comments: I, since: DateTime<Utc>) -> (Report, usize)
where
    I: IntoIterator<Item = &'a Comment>,
{
    let mut state = ReportState::new();
    let mut new_messages = 0;

    for comment in comments {
        let before_baseline = comment.created_at < since;
        if !before_baseline {
            new_messages += 1;
        }
        state.ingest(&comment.content, before_baseline);
    }

    (state.into_report(), new_messages)
}

/// Build the report of a fully fetched to-do.
pub fn aggregate_todo(todo: &Todo, since: DateTime<Utc>) -> TodoReport {
    let (entries, new_messages) = aggregate_comments(&todo.comments, since);
    TodoReport {
        todo_id: todo.id,
        content: todo.content.clone(),
        assignee: todo.assignee_name().to_string(),
        comment_count: todo.comments.len(),
        new_messages,
        entries,
    }
}
