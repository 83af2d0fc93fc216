//! Run configuration.
//!
//! Every setting can come from a command-line flag or an environment variable;
//! the flag wins when both are present.

use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Args;
use regex::Regex;

use crate::client::{account_url, BasecampClient, Credentials};
use crate::error::{Error, Result};

pub const DEFAULT_TODO_MATCHING: &str = "^(Projet|Avant-vente)";
pub const DEFAULT_REPORT_MATCHING: &str = "^Point d'activité";

/// Connection and matching options shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct BasecampArgs {
    /// Username of a Basecamp account that can access all projects
    #[arg(long, env = "BASECAMP_USER", default_value = "")]
    pub basecamp_user: String,

    /// Password of that account
    #[arg(long, env = "BASECAMP_PASS", default_value = "", hide_env_values = true)]
    pub basecamp_pass: String,

    /// Basecamp account ID
    #[arg(long, env = "BASECAMP_ACCOUNT", default_value_t = 0)]
    pub basecamp_account: u64,

    /// Basecamp project ID
    #[arg(long, env = "BASECAMP_PROJECT", default_value_t = 0)]
    pub basecamp_project: u64,

    /// Regexp that to-do list names must match
    #[arg(long, env = "BASECAMP_TODO_MATCHING", default_value = DEFAULT_TODO_MATCHING)]
    pub basecamp_todo_matching: String,

    /// Regexp that report titles must match
    #[arg(long, env = "BASECAMP_REPORT_MATCHING", default_value = DEFAULT_REPORT_MATCHING)]
    pub basecamp_report_matching: String,

    /// API base URL (defaults to https://basecamp.com/<account>/api/v1)
    #[arg(long, env = "BASECAMP_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "BASECAMP_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Baseline timestamp (RFC 3339) instead of the latest report's date
    #[arg(long)]
    pub since: Option<String>,

    /// API key for HipChat notifications (not supported, ignored)
    #[arg(long, env = "HIPCHAT_API_KEY", hide_env_values = true)]
    pub hipchat_api_key: Option<String>,

    /// Refresh period for activity monitoring, e.g. `10s` (not supported, ignored)
    #[arg(long, env = "BASECAMP_REFRESH", default_value = "10s")]
    pub refresh: String,
}

/// Validated configuration of a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: u64,
    pub project_id: u64,
    pub credentials: Credentials,
    pub todo_matching: Regex,
    pub report_matching: Regex,
    pub base_url: String,
    pub timeout: Duration,
    pub since: Option<DateTime<Utc>>,
    pub hipchat_api_key: Option<String>,
    /// Kept verbatim; the monitoring loop it configured does not exist.
    pub refresh: String,
}

impl BasecampArgs {
    /// Compile patterns and parse timestamps.
    pub fn into_config(self) -> Result<Config> {
        let todo_matching = compile("to-do list", &self.basecamp_todo_matching)?;
        let report_matching = compile("report", &self.basecamp_report_matching)?;

        let since = self
            .since
            .as_deref()
            .map(DateTime::parse_from_rfc3339)
            .transpose()?
            .map(|since| since.with_timezone(&Utc));

        if self.timeout == 0 {
            return Err(Error::InvalidTimeout);
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| account_url(self.basecamp_account));

        Ok(Config {
            account_id: self.basecamp_account,
            project_id: self.basecamp_project,
            credentials: Credentials {
                username: self.basecamp_user,
                password: self.basecamp_pass,
            },
            todo_matching,
            report_matching,
            base_url,
            timeout: Duration::from_secs(self.timeout),
            since,
            hipchat_api_key: self.hipchat_api_key.filter(|key| !key.is_empty()),
            refresh: self.refresh,
        })
    }
}

impl Config {
    pub fn client(&self) -> Result<BasecampClient> {
        Ok(BasecampClient::new(
            self.base_url.clone(),
            self.credentials.clone(),
            self.timeout,
        )?)
    }

    /// Log the settings that belong to the removed monitoring mode.
    pub fn warn_unsupported(&self) {
        if self.hipchat_api_key.is_some() {
            tracing::warn!("HipChat notifications are not supported, ignoring --hipchat-api-key");
        }
        tracing::debug!(
            "Activity monitoring is disabled, refresh period {} unused",
            self.refresh
        );
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: BasecampArgs,
    }

    fn parse(args: &[&str]) -> BasecampArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).expect("Failed to parse").args
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--basecamp-account",
            "42",
            "--basecamp-project",
            "7",
            "--basecamp-user",
            "bot",
            "--basecamp-todo-matching",
            "^Sprint",
        ])
        .into_config()
        .expect("Invalid config");

        assert_eq!(config.account_id, 42);
        assert_eq!(config.project_id, 7);
        assert_eq!(config.credentials.username, "bot");
        assert_eq!(config.base_url, "https://basecamp.com/42/api/v1");
        assert!(config.todo_matching.is_match("Sprint 3"));
        assert!(!config.todo_matching.is_match("Projet Alpha"));
    }

    #[test]
    fn test_base_url_override() {
        let config = parse(&["--base-url", "http://127.0.0.1:9000/api/v1"])
            .into_config()
            .expect("Invalid config");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1");
    }

    #[test]
    fn test_since_is_parsed_to_utc() {
        let config = parse(&["--since", "2015-03-09T10:00:00+01:00"])
            .into_config()
            .expect("Invalid config");
        assert_eq!(
            config.since.unwrap().to_rfc3339(),
            "2015-03-09T09:00:00+00:00"
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = parse(&["--basecamp-report-matching", "(unclosed"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { name: "report", .. }));
    }

    #[test]
    fn test_refresh_accepts_durations() {
        let config = parse(&["--refresh", "1m30s"])
            .into_config()
            .expect("Invalid config");
        assert_eq!(config.refresh, "1m30s");
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = parse(&["--timeout", "0"]).into_config().unwrap_err();
        assert!(matches!(err, Error::InvalidTimeout));
    }

    #[test]
    fn test_invalid_since_is_reported() {
        let err = parse(&["--since", "last tuesday"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSince(_)));
    }
}
