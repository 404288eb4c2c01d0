//! Runtime configuration resolved from the workflow environment.
//!
//! GitHub Actions describes each run through a fixed set of `GITHUB_*`
//! environment variables. This module captures the subset herald needs as an
//! explicit [`ActionConfig`] value: the core never reads the environment
//! ambiently, so tests and library callers can construct configuration
//! directly.
//!
//! # Environment Variables
//!
//! - `GITHUB_EVENT_PATH`: path to the JSON document describing the trigger
//!   event
//! - `GITHUB_EVENT_NAME`: name of the workflow trigger event
//! - `GITHUB_REF`: fully qualified Git ref the workflow runs against
//! - `GITHUB_TOKEN`: API credential; only required when publishing
//! - `GITHUB_API_URL`: REST API root, set by the runner (differs on GitHub
//!   Enterprise installs)

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;

/// REST API root used when the runner does not provide `GITHUB_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Workflow inputs read once at startup.
///
/// # Example
///
/// ```no_run
/// use herald::ActionConfig;
///
/// let config = ActionConfig::from_env();
/// assert!(!config.api_url.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Path to the JSON document describing the trigger event
    /// (`GITHUB_EVENT_PATH`).
    pub event_path: Utf8PathBuf,

    /// Name of the workflow trigger event (`GITHUB_EVENT_NAME`), e.g.
    /// `pull_request` or `repository_dispatch`.
    pub event_name: String,

    /// Fully qualified Git ref the workflow runs against (`GITHUB_REF`),
    /// e.g. `refs/heads/feature-x`.
    pub git_ref: String,

    /// API credential (`GITHUB_TOKEN`); only required when publishing a
    /// notification. Blank values are treated as absent.
    pub token: Option<String>,

    /// REST API root (`GITHUB_API_URL`).
    pub api_url: String,

    /// Deadline applied to each outbound API request.
    pub http_timeout: Duration,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            event_path: Utf8PathBuf::new(),
            event_name: String::new(),
            git_ref: String::new(),
            token: None,
            api_url: DEFAULT_API_URL.to_owned(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ActionConfig {
    /// Reads the workflow environment into an explicit configuration value.
    ///
    /// Missing variables fall back to the defaults of [`Default`]; a blank
    /// `GITHUB_TOKEN` is treated as absent so that a later notification
    /// fails with a missing-credential error rather than an authentication
    /// failure.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            event_path: env::var("GITHUB_EVENT_PATH")
                .map(Utf8PathBuf::from)
                .unwrap_or_default(),
            event_name: env::var("GITHUB_EVENT_NAME").unwrap_or_default(),
            git_ref: env::var("GITHUB_REF").unwrap_or_default(),
            token: env::var("GITHUB_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            api_url: env::var("GITHUB_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
