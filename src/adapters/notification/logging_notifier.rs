//! Logging notifier.
//!
//! Stands in for the webhook when no URL is configured: the event is
//! written to the log and delivery always succeeds.

use async_trait::async_trait;

use crate::domain::complaint::ComplaintSubmitted;
use crate::ports::{ComplaintNotifier, NotificationError};

#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ComplaintNotifier for LoggingNotifier {
    async fn notify(&self, event: &ComplaintSubmitted) -> Result<(), NotificationError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| NotificationError::Encoding(e.to_string()))?;
        tracing::info!(
            issue_type = event.complaint.issue_type,
            department = event.complaint.department,
            "Complaint submitted (no webhook configured)"
        );
        tracing::debug!(payload = %payload, "Complaint notification payload");
        Ok(())
    }
}
