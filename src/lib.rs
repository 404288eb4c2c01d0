//! Herald library crate for idempotent CI status comments.
//!
//! A workflow run invokes herald once with a finished status message. The
//! library normalises the trigger event into a [`CiContext`] — repository
//! URL, pull request number, and branch — and publishes the message as a
//! single marker-tagged comment on the pull request, so repeated runs edit
//! one comment instead of stacking new ones.

pub mod ci;
pub mod config;
pub mod github;

pub use ci::{ApiError, CiContext, NotifyError};
pub use config::ActionConfig;
pub use github::GitHubContext;
