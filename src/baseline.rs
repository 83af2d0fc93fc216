//! Baseline resolution: when was the last status report posted?
//!
//! Reports are messages whose title follows a naming convention (by default
//! `Point d'activité ...`). Comments posted since the latest one are "new".

use regex::Regex;

use crate::client::BasecampClient;
use crate::error::{Error, Result};
use crate::models::{Message, Topic};

/// Pick the latest message topic whose title matches `pattern`.
///
/// On equal creation times the topic listed first wins.
pub fn latest_report_topic<'a>(topics: &'a [Topic], pattern: &Regex) -> Option<&'a Topic> {
    let mut latest: Option<&Topic> = None;
    for topic in topics {
        if !pattern.is_match(&topic.title) || !topic.is_message() {
            continue;
        }
        if latest.map_or(true, |l| topic.created_at > l.created_at) {
            latest = Some(topic);
        }
    }
    latest
}

/// Fetch the latest report message of a project.
pub async fn resolve_baseline(
    client: &BasecampClient,
    project_id: u64,
    pattern: &Regex,
) -> Result<Message> {
    let topics = client.list_topics(project_id).await?;
    let topic = latest_report_topic(&topics, pattern).ok_or_else(|| Error::NoBaselineReport {
        pattern: pattern.as_str().to_string(),
    })?;

    tracing::debug!(
        "Latest report is {:?} (message {})",
        topic.title,
        topic.topicable.id
    );

    let message = client.get_message(project_id, topic.topicable.id).await?;
    Ok(message)
}
