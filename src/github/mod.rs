//! GitHub Actions backend for CI status notification.
//!
//! This module decodes the workflow trigger event into a [`GitHubContext`]
//! and implements notification as an idempotent comment upsert against the
//! GitHub REST API: list the pull request's comments, find the first one
//! carrying the context's marker, then edit it in place or create a fresh
//! one. API failures are mapped into the taxonomy on
//! [`crate::ci::NotifyError`] so callers never see transport internals.

mod context;
mod gateway;
mod models;
mod notify;

pub use context::GitHubContext;
pub use models::{
    EventClientPayload, EventHead, EventPullRequest, EventPullRequestRef, EventRepository,
    TriggerKind, WorkflowEvent,
};
