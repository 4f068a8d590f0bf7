//! Contact form submission: payload, relay endpoint, email delivery and the
//! presenter-side client

mod client;
mod provider;
mod server;
mod submission;

pub use client::{ContactApi, RelayClient, SubmitError, DEFAULT_RELAY_URL};
pub use provider::{DeliveryError, EmailProvider, HttpEmailProvider, OutgoingEmail};
pub use server::{router, serve, submit_contact, RelayResponse, RelayState, CONTACT_PATH};
pub use submission::{is_valid_email, ContactField, ContactSubmission, ValidationError};

#[cfg(test)]
pub use client::MockContactApi;
#[cfg(test)]
pub use provider::MockEmailProvider;

use std::time::Duration;

/// Time allowed for a whole request, connection included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Time allowed to establish the connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client that gives up instead of waiting on a silent peer
fn http_client(request_timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(request_timeout))
        .build()
}
