//! Complaint field tags.
//!
//! A single vocabulary for the fields the assistant collects, shared by the
//! validators (result keys) and the dialogue (what was last asked for).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A collectable complaint field.
///
/// `ContactInfo` is a prompt-only tag: it asks for "email or phone" in one
/// question and the answer is routed to `ContactEmail` or `ContactPhone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    IssueType,
    ComplaintDescription,
    Location,
    CitizenName,
    ContactInfo,
    ContactEmail,
    ContactPhone,
    Priority,
}

impl Field {
    /// Required fields in the order they are collected.
    pub const REQUIRED: [Field; 4] = [
        Field::IssueType,
        Field::ComplaintDescription,
        Field::Location,
        Field::CitizenName,
    ];

    /// Returns the snake_case tag used in logs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::IssueType => "issue_type",
            Field::ComplaintDescription => "complaint_description",
            Field::Location => "location",
            Field::CitizenName => "citizen_name",
            Field::ContactInfo => "contact_info",
            Field::ContactEmail => "contact_email",
            Field::ContactPhone => "contact_phone",
            Field::Priority => "priority",
        }
    }

    /// Returns true if completion is blocked while this field is unset.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Returns true for the tags that collect contact details.
    pub fn is_contact(&self) -> bool {
        matches!(
            self,
            Field::ContactInfo | Field::ContactEmail | Field::ContactPhone
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_follow_collection_order() {
        assert_eq!(
            Field::REQUIRED,
            [
                Field::IssueType,
                Field::ComplaintDescription,
                Field::Location,
                Field::CitizenName
            ]
        );
    }

    #[test]
    fn contact_and_priority_are_not_required() {
        assert!(!Field::ContactEmail.is_required());
        assert!(!Field::ContactPhone.is_required());
        assert!(!Field::ContactInfo.is_required());
        assert!(!Field::Priority.is_required());
    }

    #[test]
    fn contact_tags_are_recognized() {
        assert!(Field::ContactInfo.is_contact());
        assert!(Field::ContactEmail.is_contact());
        assert!(Field::ContactPhone.is_contact());
        assert!(!Field::CitizenName.is_contact());
    }

    #[test]
    fn serializes_to_snake_case_tag() {
        let json = serde_json::to_string(&Field::ComplaintDescription).unwrap();
        assert_eq!(json, "\"complaint_description\"");
        assert_eq!(Field::ComplaintDescription.as_str(), "complaint_description");
    }
}
