//! Wire models for the trigger event payload and the comments API.
//!
//! Event structures decode permissively: unknown fields are ignored and
//! every field is individually defaulted, so a payload that carries only
//! part of a shape still decodes, with the gaps left at their zero values.

use serde::{Deserialize, Serialize};

/// Payload-shape branch implied by the workflow event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// A direct pull request trigger (`pull_request` or
    /// `pull_request_target`).
    PullRequest,
    /// A `repository_dispatch` trigger referencing a pull request by number.
    Dispatch,
    /// Any other trigger; yields an empty context.
    Other,
}

impl TriggerKind {
    /// Maps a `GITHUB_EVENT_NAME` value onto the payload shape it implies.
    ///
    /// The payload content itself is never inspected to pick the shape.
    #[must_use]
    pub fn from_event_name(event_name: &str) -> Self {
        match event_name {
            "pull_request" | "pull_request_target" => Self::PullRequest,
            "repository_dispatch" => Self::Dispatch,
            _ => Self::Other,
        }
    }
}

/// Union of the two trigger payload shapes herald understands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowEvent {
    /// Pull request object; present on direct pull request triggers.
    pub pull_request: Option<EventPullRequest>,

    /// Repository object; present on both recognised shapes.
    pub repository: Option<EventRepository>,

    /// Dispatching workflow's payload; present on dispatch triggers.
    pub client_payload: Option<EventClientPayload>,
}

/// `pull_request` object of a direct pull request event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPullRequest {
    /// Pull request number.
    #[serde(default)]
    pub number: u64,

    /// Head reference the pull request proposes to merge.
    #[serde(default)]
    pub head: EventHead,
}

/// Head reference of a pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventHead {
    /// Branch name of the head.
    #[serde(rename = "ref", default)]
    pub git_ref: String,
}

/// `repository` object shared by both event shapes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventRepository {
    /// Web URL of the repository.
    #[serde(default)]
    pub html_url: String,

    /// `owner/name` identifier used to address the REST API.
    #[serde(default)]
    pub full_name: String,
}

/// `client_payload` object of a repository dispatch event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventClientPayload {
    /// Pull request reference carried by the dispatching workflow.
    #[serde(default)]
    pub pull_request: EventPullRequestRef,
}

/// Pull request reference inside a dispatch payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPullRequestRef {
    /// Pull request number.
    #[serde(default)]
    pub number: u64,
}

/// One comment as returned by the issue comments endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    /// Comment identifier, used to address the edit endpoint.
    pub(super) id: u64,
    /// Comment body; GitHub reports `null` for comments without one.
    pub(super) body: Option<String>,
}

/// Request body for creating or overwriting a comment.
#[derive(Debug, Clone, Serialize)]
pub(super) struct CommentBody {
    /// Full replacement body of the comment.
    pub(super) body: String,
}

/// Error shape the platform reports on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiErrorBody {
    /// Human-readable failure description.
    #[serde(default)]
    pub(super) message: String,
}
