//! Webhook notifier.
//!
//! POSTs each `ComplaintSubmitted` event as JSON to a configured URL. When a
//! signing secret is set, the body is signed with HMAC-SHA256 and the hex
//! digest sent in `X-Signature-256` so the receiver can verify the sender.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::Duration;

use crate::domain::complaint::ComplaintSubmitted;
use crate::ports::{ComplaintNotifier, NotificationError};

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-256";

/// Webhook delivery settings.
#[derive(Debug, Clone)]
pub struct WebhookNotifierConfig {
    pub url: String,
    pub timeout: Duration,
    pub signing_secret: Option<SecretString>,
}

/// Delivers complaint events to an HTTP endpoint.
pub struct WebhookNotifier {
    config: WebhookNotifierConfig,
    http_client: reqwest::Client,
}

impl WebhookNotifier {
    /// Creates the notifier and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Transport` if the client cannot be built.
    pub fn new(config: WebhookNotifierConfig) -> Result<Self, NotificationError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotificationError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

/// Computes the `sha256=<hex>` signature for a request body.
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

#[async_trait]
impl ComplaintNotifier for WebhookNotifier {
    async fn notify(&self, event: &ComplaintSubmitted) -> Result<(), NotificationError> {
        let body = serde_json::to_vec(event)
            .map_err(|e| NotificationError::Encoding(e.to_string()))?;

        let mut request = self
            .http_client
            .post(&self.config.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(secret) = &self.config.signing_secret {
            request = request.header(SIGNATURE_HEADER, sign_payload(secret.expose_secret(), &body));
        }

        let response = request.body(body).send().await.map_err(|e| {
            tracing::error!("Failed to send complaint webhook: {}", e);
            NotificationError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Complaint webhook returned {}", status);
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Complaint webhook delivered to {}", self.config.url);
        Ok(())
    }
}
