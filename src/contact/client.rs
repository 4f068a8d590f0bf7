//! Client used by the presenter to hand the contact form to the relay

use super::server::{RelayResponse, CONTACT_PATH};
use super::submission::ContactSubmission;
use super::{http_client, REQUEST_TIMEOUT};
use async_trait::async_trait;
use std::time::Duration;

/// Default relay address
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8787";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The relay answered with an error body
    #[error("{0}")]
    Rejected(String),
    /// The relay could not be reached or answered nonsense
    #[error("could not reach the contact relay: {0}")]
    Transport(String),
}

/// Trait for relay submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Submit the form; returns the relay's confirmation message
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError>;
}

/// HTTP client for the contact relay
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Client whose requests fail once `timeout` has passed
    pub fn with_timeout(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            endpoint: endpoint_for(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
}

#[async_trait]
impl ContactApi for RelayClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::Transport(format!("relay did not answer in time: {e}"))
                } else {
                    SubmitError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .json::<RelayResponse>()
            .await
            .map_err(|e| SubmitError::Transport(format!("unexpected response ({status}): {e}")))?;

        match body {
            RelayResponse::Message { message } if status.is_success() => Ok(message),
            RelayResponse::Error { error } => Err(SubmitError::Rejected(error)),
            RelayResponse::Message { message } => Err(SubmitError::Rejected(message)),
        }
    }
}
