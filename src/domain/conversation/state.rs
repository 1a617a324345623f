//! Per-session conversation state.
//!
//! Every collected field is a typed option; "missing" is `None` rather than
//! an absent key.

use serde::{Deserialize, Serialize};

use crate::domain::complaint::{ComplaintDraft, Field, IssueType, Priority};
use crate::domain::foundation::{ComplaintId, SessionId, Timestamp};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Everything known about one citizen's complaint conversation.
///
/// # Invariants
///
/// - `messages` is append-only
/// - `issue_type` is set once and never changed until reset
/// - `last_asked_field` is unset or names a field still missing or failing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub session_id: SessionId,
    pub messages: Vec<ChatMessage>,
    pub issue_type: Option<IssueType>,
    pub complaint_description: Option<String>,
    pub location: Option<String>,
    pub citizen_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub priority: Option<Priority>,
    pub last_asked_field: Option<Field>,
    /// Optional prompts (contact, priority) already answered or skipped.
    pub settled_optional: Vec<Field>,
    pub completed: bool,
    pub submitted_complaint_id: Option<ComplaintId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ConversationState {
    /// Creates the empty state a new session starts from.
    pub fn new(session_id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            session_id,
            messages: Vec::new(),
            issue_type: None,
            complaint_description: None,
            location: None,
            citizen_name: None,
            contact_email: None,
            contact_phone: None,
            priority: None,
            last_asked_field: None,
            settled_optional: Vec::new(),
            completed: false,
            submitted_complaint_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Required fields still unset, in collection order.
    pub fn missing_required_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| !self.has_value(*field))
            .collect()
    }

    /// Returns true if the field holds a non-blank value.
    pub fn has_value(&self, field: Field) -> bool {
        match field {
            Field::IssueType => self.issue_type.is_some(),
            Field::Priority => self.priority.is_some(),
            Field::ContactInfo => self.has_value(Field::ContactEmail) || self.has_value(Field::ContactPhone),
            _ => self
                .text_value(field)
                .is_some_and(|value| !value.trim().is_empty()),
        }
    }

    /// Value of a free-text field.
    pub fn text_value(&self, field: Field) -> Option<&str> {
        match field {
            Field::ComplaintDescription => self.complaint_description.as_deref(),
            Field::Location => self.location.as_deref(),
            Field::CitizenName => self.citizen_name.as_deref(),
            Field::ContactEmail => self.contact_email.as_deref(),
            Field::ContactPhone => self.contact_phone.as_deref(),
            Field::IssueType | Field::ContactInfo | Field::Priority => None,
        }
    }

    /// Overwrites a free-text field. Non-text tags are ignored.
    pub fn set_text_value(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::ComplaintDescription => self.complaint_description = value,
            Field::Location => self.location = value,
            Field::CitizenName => self.citizen_name = value,
            Field::ContactEmail => self.contact_email = value,
            Field::ContactPhone => self.contact_phone = value,
            Field::IssueType | Field::ContactInfo | Field::Priority => {}
        }
    }

    pub fn is_settled(&self, field: Field) -> bool {
        self.settled_optional.contains(&field)
    }

    pub fn settle(&mut self, field: Field) {
        if !self.is_settled(field) {
            self.settled_optional.push(field);
        }
    }

    /// Snapshot of the collected values for validation.
    pub fn draft(&self) -> ComplaintDraft {
        ComplaintDraft {
            issue_type: self.issue_type,
            complaint_description: self.complaint_description.clone(),
            location: self.location.clone(),
            citizen_name: self.citizen_name.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            priority: self.priority,
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ConversationState {
        ConversationState::new(SessionId::new("s-1").unwrap())
    }

    #[test]
    fn new_state_is_empty() {
        let state = state();
        assert!(state.messages.is_empty());
        assert!(!state.completed);
        assert_eq!(state.last_asked_field, None);
        assert_eq!(state.missing_required_fields(), Field::REQUIRED.to_vec());
    }

    #[test]
    fn missing_fields_shrink_as_values_arrive() {
        let mut state = state();
        state.issue_type = Some(IssueType::Road);
        state.location = Some("123 Main Street".to_string());

        assert_eq!(
            state.missing_required_fields(),
            vec![Field::ComplaintDescription, Field::CitizenName]
        );
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let mut state = state();
        state.citizen_name = Some("   ".to_string());
        assert!(!state.has_value(Field::CitizenName));
    }

    #[test]
    fn contact_info_reflects_either_channel() {
        let mut state = state();
        assert!(!state.has_value(Field::ContactInfo));
        state.contact_phone = Some("555-0123".to_string());
        assert!(state.has_value(Field::ContactInfo));
    }

    #[test]
    fn settle_is_idempotent() {
        let mut state = state();
        state.settle(Field::ContactInfo);
        state.settle(Field::ContactInfo);
        assert_eq!(state.settled_optional, vec![Field::ContactInfo]);
    }

    #[test]
    fn set_text_value_ignores_non_text_tags() {
        let mut state = state();
        state.set_text_value(Field::Priority, Some("high".to_string()));
        assert_eq!(state.priority, None);
        state.set_text_value(Field::Location, Some("Elm Street".to_string()));
        assert_eq!(state.text_value(Field::Location), Some("Elm Street"));
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = state();
        state.issue_type = Some(IssueType::Water);
        state.last_asked_field = Some(Field::ComplaintDescription);
        state.push_message(ChatMessage::user("water/plumbing issues"));

        let json = serde_json::to_string(&state).unwrap();
        let restored: ConversationState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
