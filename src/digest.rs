//! Report run over one project.

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::baseline::resolve_baseline;
use crate::client::BasecampClient;
use crate::config::Config;
use crate::error::Result;
use crate::report::{aggregate_todo, render_todo, TodoReport};

/// Reports of one matching to-do list.
#[derive(Debug, Clone)]
pub struct TodoListDigest {
    pub todolist_id: u64,
    pub name: String,
    pub todos: Vec<TodoReport>,
}

/// Resolve the baseline and report on every matching to-do list.
///
/// An explicit `since` in the configuration skips baseline resolution.
pub async fn run(client: &BasecampClient, config: &Config) -> Result<Vec<TodoListDigest>> {
    let since = match config.since {
        Some(since) => since,
        None => {
            let message =
                resolve_baseline(client, config.project_id, &config.report_matching).await?;
            tracing::info!("Changes since {:?} ({})", message.subject, message.created_at);
            message.created_at
        }
    };

    digest_project(client, config.project_id, &config.todo_matching, since).await
}

/// Report on the remaining to-dos of every list whose name matches `todo_matching`.
///
/// Lists are processed one at a time in API order; each report is logged as
/// soon as its to-do has been fetched.
pub async fn digest_project(
    client: &BasecampClient,
    project_id: u64,
    todo_matching: &Regex,
    since: DateTime<Utc>,
) -> Result<Vec<TodoListDigest>> {
    let todolists = client.list_todolists(project_id).await?;
    let mut digests = Vec::new();

    for todolist in todolists {
        if !todo_matching.is_match(&todolist.name) {
            tracing::debug!("Skipping to-do list {:?}", todolist.name);
            continue;
        }

        let remaining = client.list_remaining_todos(project_id, todolist.id).await?;
        tracing::info!("{}", todolist.name);

        let mut todos = Vec::with_capacity(remaining.len());
        for todo in remaining {
            let full = client.get_todo(project_id, todo.id).await?;
            let report = aggregate_todo(&full, since);
            for line in render_todo(&report).lines() {
                tracing::info!("{}", line);
            }
            todos.push(report);
        }

        digests.push(TodoListDigest {
            todolist_id: todolist.id,
            name: todolist.name,
            todos,
        });
    }

    Ok(digests)
}
