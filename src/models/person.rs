use serde::Deserialize;

use super::null_as_default;

/// A Basecamp user, as embedded in comments and to-dos.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "email_address")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin: bool,
}

/// The party a to-do is assigned to.
///
/// Basecamp assigns to-dos either to a single person or to a group, hence the
/// separate `type` field.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Assignee {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
