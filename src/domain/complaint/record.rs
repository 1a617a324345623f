//! Record assembly: a validated draft becomes a persistable complaint.

use serde::Serialize;

use super::issue_type::{Department, IssueType};
use super::priority::Priority;
use super::validation::{validate_complaint, ComplaintDraft, ValidationReport};
use crate::domain::foundation::{SessionId, Timestamp};

/// Channel a complaint arrived through.
pub const SOURCE_CHAT: &str = "chat";

/// A complaint whose every field passed validation.
///
/// Only [`ValidatedComplaint::assemble`] constructs one, so holding a value
/// is proof the all-fields check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedComplaint {
    session_id: SessionId,
    issue_type: IssueType,
    complaint_description: String,
    location: String,
    citizen_name: String,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    priority: Priority,
    department: Department,
    source: &'static str,
    created_at: Timestamp,
}

impl ValidatedComplaint {
    /// Validates the draft and fills defaults.
    ///
    /// # Errors
    ///
    /// Returns the full report when any field fails.
    pub fn assemble(session_id: SessionId, draft: &ComplaintDraft) -> Result<Self, ValidationReport> {
        let report = validate_complaint(draft);
        if !report.is_valid() {
            return Err(report);
        }

        let (Some(issue_type), Some(description), Some(location), Some(name)) = (
            draft.issue_type,
            draft.complaint_description.as_deref(),
            draft.location.as_deref(),
            draft.citizen_name.as_deref(),
        ) else {
            // Unreachable in practice: required fields passed validation.
            return Err(report);
        };

        Ok(Self {
            session_id,
            issue_type,
            complaint_description: description.trim().to_string(),
            location: location.trim().to_string(),
            citizen_name: name.trim().to_string(),
            contact_email: trimmed_optional(draft.contact_email.as_deref()),
            contact_phone: trimmed_optional(draft.contact_phone.as_deref()),
            priority: draft.priority.unwrap_or_default(),
            department: Department::for_issue(Some(issue_type)),
            source: SOURCE_CHAT,
            created_at: Timestamp::now(),
        })
    }

    /// Converts back to a draft, e.g. to re-run validation.
    pub fn to_draft(&self) -> ComplaintDraft {
        ComplaintDraft {
            issue_type: Some(self.issue_type),
            complaint_description: Some(self.complaint_description.clone()),
            location: Some(self.location.clone()),
            citizen_name: Some(self.citizen_name.clone()),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            priority: Some(self.priority),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    /// Identifier stored in the complaints table.
    pub fn issue_code(&self) -> &'static str {
        self.issue_type.persistence_code()
    }

    pub fn complaint_description(&self) -> &str {
        &self.complaint_description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn citizen_name(&self) -> &str {
        &self.citizen_name
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.contact_phone.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
