//! Complaint Notifier Port - Announces accepted complaints.
//!
//! Delivery is best-effort: callers log failures and move on, there is no
//! retry.

use async_trait::async_trait;

use crate::domain::complaint::ComplaintSubmitted;

/// Errors that can occur while delivering a notification
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to send notification: {0}")]
    Transport(String),

    #[error("Receiver responded with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to encode notification: {0}")]
    Encoding(String),
}

/// Port for pushing complaint events to an external receiver
#[async_trait]
pub trait ComplaintNotifier: Send + Sync {
    /// Delivers one complaint event.
    ///
    /// # Errors
    /// Returns `NotificationError` if delivery fails
    async fn notify(&self, event: &ComplaintSubmitted) -> Result<(), NotificationError>;
}
