//! GitHub implementation of the CI context.
//!
//! [`GitHubContext`] is built once per run from an [`ActionConfig`]: the
//! trigger event document is opened and decoded a single time, the event
//! name selects which payload shape populates the context, and the result
//! is immutable. Publishing is an idempotent comment upsert keyed on
//! [`GitHubContext::preview_marker`].

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use camino::Utf8Path;

use crate::ci::{CiContext, NotifyError};
use crate::config::ActionConfig;

use super::models::{EventRepository, TriggerKind, WorkflowEvent};
use super::notify;

/// CI context extracted from a GitHub Actions trigger event.
///
/// # Example
///
/// ```no_run
/// use herald::{ActionConfig, CiContext, GitHubContext};
///
/// let config = ActionConfig::from_env();
/// let context = GitHubContext::from_config(&config)?;
/// context.notify("Preview deployed.")?;
/// # Ok::<(), herald::NotifyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitHubContext {
    repository_url: String,
    pr_number: u64,
    default_branch: String,
    repository_name: String,
    token: Option<String>,
    api_url: String,
    http_timeout: Duration,
}

impl GitHubContext {
    /// Builds the context for the run described by `config`.
    ///
    /// The document at `config.event_path` is decoded permissively and the
    /// branch between the two known payload shapes follows
    /// `config.event_name`, never the payload content. For a dispatch
    /// trigger the branch name comes from `config.git_ref` with one leading
    /// `refs/heads/` prefix stripped. Unrecognised event names produce an
    /// empty context rather than an error; notifying on such a context
    /// fails at the API.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::PayloadUnreadable`] when the event document
    /// cannot be opened and [`NotifyError::PayloadMalformed`] when it cannot
    /// be decoded.
    pub fn from_config(config: &ActionConfig) -> Result<Self, NotifyError> {
        let event = read_event(&config.event_path)?;
        let mut context = Self {
            repository_url: String::new(),
            pr_number: 0,
            default_branch: String::new(),
            repository_name: String::new(),
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            http_timeout: config.http_timeout,
        };

        match TriggerKind::from_event_name(&config.event_name) {
            TriggerKind::PullRequest => {
                let pull_request = event.pull_request.unwrap_or_default();
                context.pr_number = pull_request.number;
                context.default_branch = pull_request.head.git_ref;
                context.adopt_repository(event.repository);
            }
            TriggerKind::Dispatch => {
                context.pr_number = event.client_payload.unwrap_or_default().pull_request.number;
                context.default_branch = config
                    .git_ref
                    .strip_prefix("refs/heads/")
                    .unwrap_or(&config.git_ref)
                    .to_owned();
                context.adopt_repository(event.repository);
            }
            TriggerKind::Other => {}
        }

        Ok(context)
    }

    fn adopt_repository(&mut self, repository: Option<EventRepository>) {
        let EventRepository {
            html_url,
            full_name,
        } = repository.unwrap_or_default();
        self.repository_url = html_url;
        self.repository_name = full_name;
    }

    /// Pull request number this run reports on; zero for unrecognised
    /// triggers.
    #[must_use]
    pub const fn pr_number(&self) -> u64 {
        self.pr_number
    }

    /// `owner/name` identifier used to address the REST API.
    #[must_use]
    pub const fn repository_name(&self) -> &str {
        self.repository_name.as_str()
    }

    /// Marker appended to every published body.
    ///
    /// Embeds the pull request number so a later run can find the comment
    /// it owns, and runs for other pull requests never match it.
    #[must_use]
    pub fn preview_marker(&self) -> String {
        format!("<!-- herald-preview {} -->", self.pr_number)
    }

    /// API path of the comment list for this pull request.
    pub(super) fn comments_path(&self) -> String {
        format!(
            "repos/{}/issues/{}/comments",
            self.repository_name, self.pr_number
        )
    }

    /// API path of one comment, addressed for editing.
    pub(super) fn comment_path(&self, id: u64) -> String {
        format!("repos/{}/issues/comments/{id}", self.repository_name)
    }

    /// Trimmed, non-empty credential, or the hard missing-credential
    /// failure. Checked before any request is issued.
    pub(super) fn credential(&self) -> Result<&str, NotifyError> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(NotifyError::MissingCredential)
    }

    pub(super) const fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    pub(super) const fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}

fn read_event(path: &Utf8Path) -> Result<WorkflowEvent, NotifyError> {
    let file = File::open(path).map_err(|error| {
        tracing::warn!("failed to read event payload '{path}': {error}");
        NotifyError::PayloadUnreadable {
            path: path.to_owned(),
            message: error.to_string(),
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|error| {
        tracing::warn!("failed to decode event payload '{path}': {error}");
        NotifyError::PayloadMalformed {
            path: path.to_owned(),
            message: error.to_string(),
        }
    })
}

impl CiContext for GitHubContext {
    fn repository_url(&self) -> &str {
        &self.repository_url
    }

    fn source_url(&self) -> String {
        format!("{}/pull/{}", self.repository_url, self.pr_number)
    }

    fn default_branch(&self) -> &str {
        &self.default_branch
    }

    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        notify::publish(self, message)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
