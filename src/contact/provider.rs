//! Email delivery provider
//!
//! The relay hands every accepted submission to an [`EmailProvider`]. The
//! production implementation talks to a transactional email HTTP API.

use super::submission::ContactSubmission;
use super::{http_client, REQUEST_TIMEOUT};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Message handed to the email provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Compose the operator notification for a validated submission
    pub fn from_submission(
        submission: &ContactSubmission,
        from: &str,
        to: &str,
        id: Uuid,
        received_at: DateTime<Utc>,
    ) -> Self {
        let interest = submission.project_interest.as_deref().unwrap_or("-");
        let received = received_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let reference = id.to_string();

        let rows = [
            ("Name", submission.name.as_str()),
            ("Email", submission.email.as_str()),
            ("Phone", submission.phone.as_str()),
            ("Subject", submission.subject.as_str()),
            ("Project", interest),
            ("Received", received.as_str()),
            ("Reference", reference.as_str()),
        ];

        let mut text = String::new();
        for (label, value) in &rows {
            text.push_str(&format!("{label}: {value}\n"));
        }
        text.push('\n');
        text.push_str(&submission.message);
        text.push('\n');

        let mut html = String::from("<h2>New contact form submission</h2><table>");
        for (label, value) in &rows {
            html.push_str(&format!(
                "<tr><td><strong>{label}</strong></td><td>{}</td></tr>",
                escape_html(value)
            ));
        }
        html.push_str("</table><p>");
        html.push_str(&escape_html(&submission.message).replace('\n', "<br>"));
        html.push_str("</p>");

        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            reply_to: Some(submission.email.clone()),
            subject: format!("New contact form submission: {}", submission.subject),
            text,
            html,
        }
    }
}

/// Escape text for inclusion in HTML
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reasons an email could not be handed off
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("email provider is not configured: missing {0}")]
    NotConfigured(&'static str),
    #[error("email provider unreachable: {0}")]
    Unreachable(String),
    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Trait for email delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Deliver an email; returns the provider's message id when it gives one
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, DeliveryError>;
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Email provider speaking a JSON HTTP API with bearer authentication
pub struct HttpEmailProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpEmailProvider {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> reqwest::Result<Self> {
        Self::with_timeout(endpoint, api_key, REQUEST_TIMEOUT)
    }

    /// Provider whose requests fail once `timeout` has passed
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

#[async_trait]
impl EmailProvider for HttpEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, DeliveryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DeliveryError::NotConfigured("api key"))?;
        if email.from.trim().is_empty() {
            return Err(DeliveryError::NotConfigured("sender address"));
        }
        if email.to.iter().all(|to| to.trim().is_empty()) {
            return Err(DeliveryError::NotConfigured("recipient address"));
        }

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| DeliveryError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // A success without a parseable body still counts as delivered
        let id = response
            .json::<SendResponse>()
            .await
            .ok()
            .and_then(|r| r.id);
        Ok(id)
    }
}
