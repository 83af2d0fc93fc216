//! HTTP client for the Basecamp API.
//!
//! Read-only access to the endpoints the report needs. Every request carries
//! HTTP Basic credentials and a fixed User-Agent, as Basecamp requires.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "basecamp-activities (shanti+basecamp@sogilis.com)";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transient transport failures are retried this many times.
const MAX_RETRIES: u32 = 1;

/// Base URL of the API for an account.
pub fn account_url(account_id: u64) -> String {
    format!("https://basecamp.com/{}/api/v1", account_id)
}

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: check BASECAMP_USER and BASECAMP_PASS")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// Basic-auth credentials.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// HTTP client for one Basecamp account.
#[derive(Debug, Clone)]
pub struct BasecampClient {
    base_url: String,
    credentials: Credentials,
    client: Client,
}

impl BasecampClient {
    /// Create a client for `https://basecamp.com/<account_id>/api/v1`.
    pub fn for_account(account_id: u64, credentials: Credentials) -> Result<Self, ClientError> {
        Self::new(account_url(account_id), credentials, DEFAULT_TIMEOUT)
    }

    /// Create with explicit configuration.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated GET request.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Connect errors and timeouts are retried once; HTTP error statuses are not.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut attempts = 0;
        let response = loop {
            match self.request(&url).send().await {
                Ok(response) => break response,
                Err(e) if attempts < MAX_RETRIES && is_transient(&e) => {
                    attempts += 1;
                    tracing::warn!("Request to {} failed, retrying: {}", url, e);
                }
                Err(e) => return Err(e.into()),
            }
        };

        self.handle_response(&url, response).await
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|source| ClientError::Decode {
                url: url.to_string(),
                source,
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(url.to_string())),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    // ============================================================
    // Account
    // ============================================================

    /// List the account's active projects.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get("/projects.json").await
    }

    // ============================================================
    // Project
    // ============================================================

    /// List a project's topics, the index of its discussions.
    pub async fn list_topics(&self, project_id: u64) -> Result<Vec<Topic>, ClientError> {
        self.get(&format!("/projects/{}/topics.json", project_id))
            .await
    }

    /// Get a message by ID.
    pub async fn get_message(
        &self,
        project_id: u64,
        message_id: u64,
    ) -> Result<Message, ClientError> {
        self.get(&format!(
            "/projects/{}/messages/{}.json",
            project_id, message_id
        ))
        .await
    }

    /// List a project's to-do lists (without their to-dos).
    pub async fn list_todolists(&self, project_id: u64) -> Result<Vec<TodoList>, ClientError> {
        self.get(&format!("/projects/{}/todolists.json", project_id))
            .await
    }

    /// Get a to-do list with its embedded to-dos.
    pub async fn get_todolist(
        &self,
        project_id: u64,
        todolist_id: u64,
    ) -> Result<TodoList, ClientError> {
        self.get(&format!(
            "/projects/{}/todolists/{}.json",
            project_id, todolist_id
        ))
        .await
    }

    /// List the incomplete to-dos of a list. Comments are not included.
    pub async fn list_remaining_todos(
        &self,
        project_id: u64,
        todolist_id: u64,
    ) -> Result<Vec<Todo>, ClientError> {
        self.get(&format!(
            "/projects/{}/todolists/{}/todos/remaining.json",
            project_id, todolist_id
        ))
        .await
    }

    /// Get a to-do with its comments.
    pub async fn get_todo(&self, project_id: u64, todo_id: u64) -> Result<Todo, ClientError> {
        self.get(&format!("/projects/{}/todos/{}.json", project_id, todo_id))
            .await
    }
}

fn is_transient(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_url() {
        assert_eq!(account_url(1234), "https://basecamp.com/1234/api/v1");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = BasecampClient::new(
            "http://localhost:1234/api/v1/",
            Credentials::default(),
            DEFAULT_TIMEOUT,
        )
        .expect("Failed to build client");
        assert_eq!(client.base_url(), "http://localhost:1234/api/v1");
    }
}
