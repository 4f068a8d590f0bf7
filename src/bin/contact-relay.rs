//! Contact relay - HTTP endpoint receiving the site's contact form and
//! forwarding it to the email provider

use anyhow::Result;
use estate_showcase::config::SiteConfig;
use estate_showcase::contact::{serve, HttpEmailProvider, RelayState};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_showcase=info,contact_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SiteConfig::load()?;
    let api_key = SiteConfig::email_api_key();
    if api_key.is_none() {
        // Submissions still validate; delivery answers 500 until a key is set
        tracing::warn!("EMAIL_API_KEY is not set; contact messages cannot be delivered");
    }
    let sender = config.email_from();
    let recipient = config.email_to();
    if sender.is_empty() || recipient.is_empty() {
        tracing::warn!("sender or recipient address is not configured");
    }

    let provider = HttpEmailProvider::new(config.email_api_url(), api_key)?;
    let state = Arc::new(RelayState::new(Arc::new(provider), sender, recipient));

    serve(config.relay_bind()?, state).await
}
