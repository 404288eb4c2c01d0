//! Platform-neutral view of the CI run that triggered this process.
//!
//! [`CiContext`] is the seam between "compute a status message" and "which
//! CI platform produced this run": callers only need the repository identity
//! of the change under review and a way to publish one message back to it.
//! The sole backend today is [`crate::github::GitHubContext`].

mod error;

pub use error::{ApiError, NotifyError};

/// Uniform, immutable identity of the change a CI run reports on, plus the
/// single publishing operation.
pub trait CiContext {
    /// Web URL of the repository that triggered the run.
    fn repository_url(&self) -> &str;

    /// Web URL of the change under review.
    ///
    /// Derived from the repository URL and change number on every call; the
    /// value is never cached.
    fn source_url(&self) -> String;

    /// Name of the branch the run was triggered for.
    fn default_branch(&self) -> &str;

    /// Publishes `message` as the single status comment on the change.
    ///
    /// Repeated calls overwrite the previously published comment instead of
    /// adding a new one.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingCredential`] when no API credential is
    /// configured, and the listing, creation, or update failures described
    /// on [`NotifyError`] when the platform API rejects a request.
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
