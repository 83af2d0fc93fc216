//! Status digests from Basecamp to-do comments.
//!
//! Reads a project's to-do lists, picks up `Update:` comments written as
//! `Key: Value` paragraphs, and reports the latest value of every key since the
//! last status report message.

pub mod baseline;
pub mod client;
pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod report;

pub use error::{Error, Result};
