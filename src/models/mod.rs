//! Records decoded from the Basecamp API.
//!
//! # Core Concepts
//!
//! - [`Project`]: Top-level container. A run works on exactly one project.
//! - [`TodoList`]: Named collection of [`Todo`]s. Only lists whose name matches
//!   the configured pattern are reported on.
//! - [`Todo`]: A task with an optional assignee and a thread of [`Comment`]s.
//!   The comment thread is only embedded when a to-do is fetched individually.
//! - [`Topic`]: Index entry pointing at an underlying item (a [`Message`] for
//!   status reports) with its own creation time.
//! - [`Message`]: The status report whose creation time becomes the baseline.
//!
//! All records are read-only snapshots, built fresh for every run.

mod message;
mod person;
mod project;
mod todo;

pub use message::*;
pub use person::*;
pub use project::*;
pub use todo::*;

use serde::{Deserialize, Deserializer};

/// Decode an explicit JSON `null` like a missing field.
///
/// Basecamp sends `null` for blank text (e.g. attachment-only comments).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_text_decodes_as_empty() {
        let comment: Comment = serde_json::from_str(
            r#"{"id": 1, "content": null, "created_at": "2015-03-09T09:00:00Z",
                "updated_at": "2015-03-09T09:00:00Z", "creator": null}"#,
        )
        .expect("Failed to decode comment");
        assert_eq!(comment.content, "");
        assert_eq!(comment.creator, Person::default());
    }

    #[test]
    fn test_null_fields_of_a_todo() {
        let todo: Todo = serde_json::from_str(
            r#"{"id": 7, "content": null, "assignee": null, "comments": null}"#,
        )
        .expect("Failed to decode to-do");
        assert_eq!(todo.content, "");
        assert_eq!(todo.assignee_name(), "unassigned");
        assert!(todo.comments.is_empty());
    }

    #[test]
    fn test_null_topic_title() {
        let topic: Topic = serde_json::from_str(
            r#"{"id": 3, "title": null, "created_at": "2015-03-09T09:00:00Z",
                "updated_at": "2015-03-09T09:00:00Z",
                "topicable": {"id": 30, "type": "Message"}}"#,
        )
        .expect("Failed to decode topic");
        assert_eq!(topic.title, "");
        assert!(topic.is_message());
    }
}
