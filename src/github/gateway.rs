//! Thin authenticated HTTP helper for the GitHub REST API.
//!
//! One [`ApiGateway`] is assembled per notification. Each call issues
//! exactly one attempt: no retry, no backoff, no caching. Responses outside
//! the 2xx range are normalised into [`ApiError`] using the platform's
//! `{"message": ...}` error shape.

use std::time::Duration;

use http::Method;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::ci::{ApiError, NotifyError};

use super::models::ApiErrorBody;

/// Blocking one-shot request issuer for a single API root and credential.
pub(super) struct ApiGateway {
    client: Client,
    api_root: String,
    token: String,
}

impl ApiGateway {
    /// Assembles a blocking client bound to one API root and credential.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Configuration`] when the HTTP client cannot be
    /// built.
    pub(super) fn new(api_root: &str, token: &str, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| NotifyError::Configuration {
                message: format!("failed to build HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            api_root: api_root.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        })
    }

    /// Issues one authenticated request and returns the raw 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the path cannot be joined onto
    /// the API root, [`ApiError::Transport`] when the request cannot be
    /// sent, and [`ApiError::Api`] or [`ApiError::ResponseUndecodable`] for
    /// non-2xx responses.
    pub(super) fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        let mut builder = self.client.request(method, url).bearer_auth(&self.token);
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        let response = builder.send().map_err(|error| ApiError::Transport {
            message: error.to_string(),
        })?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(decode_error(response))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/{path}", self.api_root)).map_err(|error| ApiError::InvalidUrl {
            message: error.to_string(),
        })
    }
}

/// Normalises a non-2xx response into the platform's reported message, or
/// into [`ApiError::ResponseUndecodable`] when the body does not carry one.
fn decode_error(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiErrorBody>() {
        Ok(body) => ApiError::Api {
            message: body.message,
        },
        Err(error) => ApiError::ResponseUndecodable {
            message: format!("status {status}: {error}"),
        },
    }
}
