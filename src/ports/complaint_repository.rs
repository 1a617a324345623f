//! Complaint Repository Port - Persists accepted complaints.

use async_trait::async_trait;

use crate::domain::complaint::ValidatedComplaint;
use crate::domain::foundation::ComplaintId;

/// Errors that can occur while saving a complaint
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Complaint rejected by storage: {0}")]
    Rejected(String),
}

/// Port for writing validated complaints to durable storage
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Saves a complaint and returns its new identifier.
    ///
    /// Called at most once per completed conversation.
    ///
    /// # Errors
    /// Returns `PersistenceError` if the write fails
    async fn save(&self, complaint: &ValidatedComplaint) -> Result<ComplaintId, PersistenceError>;
}
