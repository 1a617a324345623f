//! Outbound event emitted after a complaint is accepted.

use serde::Serialize;

use super::record::ValidatedComplaint;
use crate::domain::foundation::{ComplaintId, Timestamp};

pub const COMPLAINT_SUBMITTED: &str = "complaint_submitted";

/// Notification payload for an accepted complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintSubmitted {
    pub event: &'static str,
    pub timestamp: Timestamp,
    pub complaint: SubmittedComplaint,
}

/// The complaint body carried by [`ComplaintSubmitted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedComplaint {
    /// `None` when persisting failed; the notification is still sent.
    pub id: Option<ComplaintId>,
    pub citizen_name: String,
    pub location: String,
    pub issue_type: &'static str,
    pub complaint_description: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub priority: &'static str,
    pub department: &'static str,
}

impl ComplaintSubmitted {
    pub fn from_record(record: &ValidatedComplaint, id: Option<ComplaintId>) -> Self {
        Self {
            event: COMPLAINT_SUBMITTED,
            timestamp: Timestamp::now(),
            complaint: SubmittedComplaint {
                id,
                citizen_name: record.citizen_name().to_string(),
                location: record.location().to_string(),
                issue_type: record.issue_type().as_str(),
                complaint_description: record.complaint_description().to_string(),
                contact_email: record.contact_email().map(str::to_string),
                contact_phone: record.contact_phone().map(str::to_string),
                priority: record.priority().as_str(),
                department: record.department().as_str(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::{ComplaintDraft, IssueType};
    use crate::domain::foundation::SessionId;

    fn record() -> ValidatedComplaint {
        let draft = ComplaintDraft {
            issue_type: Some(IssueType::Water),
            complaint_description: Some("Leaking pipe under kitchen sink".to_string()),
            location: Some("789 Pine Road".to_string()),
            citizen_name: Some("Alex Doe".to_string()),
            contact_email: Some("alex@example.com".to_string()),
            ..Default::default()
        };
        ValidatedComplaint::assemble(SessionId::default_session(), &draft).unwrap()
    }

    #[test]
    fn payload_uses_short_issue_token_and_department() {
        let event = ComplaintSubmitted::from_record(&record(), None);

        assert_eq!(event.event, "complaint_submitted");
        assert_eq!(event.complaint.issue_type, "water");
        assert_eq!(event.complaint.department, "water");
        assert_eq!(event.complaint.priority, "medium");
    }

    #[test]
    fn serializes_nested_complaint_object() {
        let id = ComplaintId::new();
        let event = ComplaintSubmitted::from_record(&record(), Some(id));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "complaint_submitted");
        assert_eq!(json["complaint"]["id"], id.to_string());
        assert_eq!(json["complaint"]["location"], "789 Pine Road");
        assert_eq!(json["complaint"]["contact_email"], "alex@example.com");
        assert!(json["complaint"]["contact_phone"].is_null());
        assert!(json["timestamp"].is_string());
    }
}
