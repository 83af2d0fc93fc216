use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{null_as_default, Assignee, Person};

/// A named collection of to-dos inside a project.
///
/// The `todos` field is only populated when a single list is fetched; the
/// project-wide listing leaves it empty.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoList {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remaining_count: u32,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub todos: TodoBuckets,
}

/// To-dos of a list, split by completion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoBuckets {
    #[serde(default, deserialize_with = "null_as_default")]
    pub remaining: Vec<Todo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: Vec<Todo>,
}

/// A trackable task.
///
/// `comments` is only present on the single to-do endpoint. Comments are kept
/// in the order the API delivers them, which is oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub due_at: Option<String>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Todo {
    /// Display name of the assignee, or `unassigned`.
    pub fn assignee_name(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("unassigned")
    }
}

/// A comment on a to-do.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: Person,
}
