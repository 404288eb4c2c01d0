//! Idempotent upsert of the status comment on a pull request.
//!
//! The published body is always `message` plus the context's marker. The
//! first existing comment whose body contains the marker is overwritten in
//! place; with no match a fresh comment is created. The list, the decision,
//! and the write are separate requests, so two concurrent runs for the same
//! pull request can still race into a duplicate; runs are sequential per
//! workflow and the window is accepted.

use http::Method;

use crate::ci::NotifyError;

use super::context::GitHubContext;
use super::gateway::ApiGateway;
use super::models::{ApiComment, CommentBody};

/// Publishes `message` as the single status comment for the context's pull
/// request.
pub(super) fn publish(context: &GitHubContext, message: &str) -> Result<(), NotifyError> {
    let token = context.credential()?;
    let gateway = ApiGateway::new(context.api_url(), token, context.http_timeout())?;

    let response = gateway
        .request::<CommentBody>(Method::GET, &context.comments_path(), None)
        .map_err(NotifyError::ListFailed)?;
    let comments: Vec<ApiComment> = response
        .json()
        .map_err(|error| NotifyError::ListDecodeFailed {
            message: error.to_string(),
        })?;

    let marker = context.preview_marker();
    let existing = comments.iter().find(|comment| {
        comment
            .body
            .as_deref()
            .is_some_and(|body| body.contains(&marker))
    });

    let body = CommentBody {
        body: format!("{message}{marker}"),
    };
    match existing {
        None => {
            gateway
                .request(Method::POST, &context.comments_path(), Some(&body))
                .map_err(NotifyError::CreateFailed)?;
            tracing::debug!(
                "created status comment on pull request {}",
                context.pr_number()
            );
        }
        Some(comment) => {
            tracing::info!(
                "status comment already exists on pull request {}, updating comment {}",
                context.pr_number(),
                comment.id
            );
            gateway
                .request(Method::PATCH, &context.comment_path(comment.id), Some(&body))
                .map_err(|source| NotifyError::UpdateFailed {
                    id: comment.id,
                    source,
                })?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
