//! HTTP endpoint that relays contact submissions to the email provider

use super::provider::{EmailProvider, OutgoingEmail};
use super::submission::ContactSubmission;
use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

pub const CONTACT_PATH: &str = "/api/contact";

const SUCCESS_MESSAGE: &str = "Message sent successfully";
const DELIVERY_FAILED: &str = "Failed to send message. Please try again later.";
const MALFORMED_BODY: &str = "Request body must be a JSON object";

/// Response body: `{"message": ...}` on success, `{"error": ...}` otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Message { message: String },
    Error { error: String },
}

impl RelayResponse {
    fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }
}

/// Shared relay state
pub struct RelayState {
    provider: Arc<dyn EmailProvider>,
    sender: String,
    recipient: String,
}

impl RelayState {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }
}

/// Build the relay router
pub fn router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(submit_contact))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<Arc<RelayState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<RelayResponse>) {
    let submission = match payload {
        Ok(Json(submission)) => submission.trimmed(),
        Err(rejection) => {
            tracing::warn!("rejected contact submission: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(RelayResponse::error(MALFORMED_BODY)),
            );
        }
    };

    if let Err(error) = submission.validate() {
        tracing::info!("contact submission failed validation: {error}");
        return (
            StatusCode::BAD_REQUEST,
            Json(RelayResponse::error(error.to_string())),
        );
    }

    let id = Uuid::new_v4();
    let email = OutgoingEmail::from_submission(
        &submission,
        &state.sender,
        &state.recipient,
        id,
        Utc::now(),
    );

    match state.provider.send(&email).await {
        Ok(provider_id) => {
            tracing::info!(
                submission_id = %id,
                provider_id = provider_id.as_deref().unwrap_or("-"),
                "contact submission delivered"
            );
            (StatusCode::OK, Json(RelayResponse::message(SUCCESS_MESSAGE)))
        }
        Err(error) => {
            tracing::error!(submission_id = %id, "contact submission not delivered: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayResponse::error(DELIVERY_FAILED)),
            )
        }
    }
}

/// Bind and serve the relay until the process is stopped
pub async fn serve(addr: SocketAddr, state: Arc<RelayState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("contact relay listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
