//! In-Memory Complaint Repository
//!
//! Keeps saved complaints in memory. Used when no database URL is
//! configured, and in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::complaint::ValidatedComplaint;
use crate::domain::foundation::ComplaintId;
use crate::ports::{ComplaintRepository, PersistenceError};

/// In-memory complaint storage; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComplaintRepository {
    complaints: Arc<RwLock<Vec<(ComplaintId, ValidatedComplaint)>>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All saved complaints in insertion order.
    pub async fn all(&self) -> Vec<(ComplaintId, ValidatedComplaint)> {
        self.complaints.read().await.clone()
    }

    pub async fn find(&self, id: &ComplaintId) -> Option<ValidatedComplaint> {
        self.complaints
            .read()
            .await
            .iter()
            .find(|(saved, _)| saved == id)
            .map(|(_, complaint)| complaint.clone())
    }

    pub async fn count(&self) -> usize {
        self.complaints.read().await.len()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn save(&self, complaint: &ValidatedComplaint) -> Result<ComplaintId, PersistenceError> {
        let id = ComplaintId::new();
        self.complaints.write().await.push((id, complaint.clone()));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::{ComplaintDraft, IssueType};
    use crate::domain::foundation::SessionId;

    fn complaint(name: &str) -> ValidatedComplaint {
        let draft = ComplaintDraft {
            issue_type: Some(IssueType::Electricity),
            complaint_description: Some("Power outage in apartment for 2 hours".to_string()),
            location: Some("456 Oak Avenue".to_string()),
            citizen_name: Some(name.to_string()),
            ..Default::default()
        };
        ValidatedComplaint::assemble(SessionId::default_session(), &draft).unwrap()
    }

    #[tokio::test]
    async fn save_assigns_distinct_ids() {
        let repo = InMemoryComplaintRepository::new();

        let first = repo.save(&complaint("Ann Lee")).await.unwrap();
        let second = repo.save(&complaint("Bo Chen")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn find_returns_saved_complaint() {
        let repo = InMemoryComplaintRepository::new();
        let id = repo.save(&complaint("Ann Lee")).await.unwrap();

        let found = repo.find(&id).await.unwrap();
        assert_eq!(found.citizen_name(), "Ann Lee");
        assert!(repo.find(&ComplaintId::new()).await.is_none());
    }

    #[tokio::test]
    async fn clones_share_records() {
        let repo = InMemoryComplaintRepository::new();
        let clone = repo.clone();

        clone.save(&complaint("Ann Lee")).await.unwrap();

        assert_eq!(repo.all().await.len(), 1);
    }
}
