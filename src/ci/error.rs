//! Error types shared by CI notification backends.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while normalising a trigger event or publishing a status
/// comment. Every variant is terminal: callers report it and exit non-zero,
/// nothing here is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// The trigger event document could not be opened.
    #[error("failed to read event payload at '{path}': {message}")]
    PayloadUnreadable {
        /// Location of the document that could not be opened.
        path: Utf8PathBuf,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The trigger event document could not be decoded.
    #[error("failed to decode event payload at '{path}': {message}")]
    PayloadMalformed {
        /// Location of the document that could not be decoded.
        path: Utf8PathBuf,
        /// Decode error detail.
        message: String,
    },

    /// No API credential was available when a notification was attempted.
    #[error("API credential is required")]
    MissingCredential,

    /// The HTTP client could not be assembled from the configuration.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Listing the existing pull request comments failed.
    #[error("failed to list pull request comments: {0}")]
    ListFailed(#[source] ApiError),

    /// The comment list response decoded into something other than comments.
    #[error("failed to decode pull request comment list: {message}")]
    ListDecodeFailed {
        /// Decode error detail.
        message: String,
    },

    /// Creating a new status comment failed.
    #[error("failed to create status comment: {0}")]
    CreateFailed(#[source] ApiError),

    /// Updating the previously published status comment failed.
    #[error("failed to update status comment {id}: {source}")]
    UpdateFailed {
        /// Identifier of the comment that could not be edited.
        id: u64,
        /// The API failure that aborted the update.
        source: ApiError,
    },
}

/// Failure of a single API request, as normalised by the HTTP gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The platform rejected the request and reported a message.
    #[error("{message}")]
    Api {
        /// Error message from the platform, verbatim.
        message: String,
    },

    /// The error response body did not carry the expected message shape.
    #[error("failed to decode error response: {message}")]
    ResponseUndecodable {
        /// Response status and decode error detail.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The request URL could not be assembled from the API root.
    #[error("invalid request URL: {message}")]
    InvalidUrl {
        /// URL parse error detail.
        message: String,
    },
}
