use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::null_as_default;

/// Topicable type of a status report message.
pub const MESSAGE_TYPE: &str = "Message";

/// A discussion index entry.
///
/// Topics are the cheap way to list everything discussed in a project; the
/// actual content lives in the item referenced by [`Topicable`].
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub topicable: Topicable,
}

impl Topic {
    /// Whether the referenced item is a message.
    pub fn is_message(&self) -> bool {
        self.topicable.kind == MESSAGE_TYPE
    }
}

/// Reference from a [`Topic`] to its underlying item.
#[derive(Debug, Clone, Deserialize)]
pub struct Topicable {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub kind: String,
}

/// A message posted on the project's message board.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
