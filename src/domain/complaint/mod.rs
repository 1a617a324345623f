//! Complaint module - What a civic complaint is and when it is valid.
//!
//! Categories, priorities, field validators, the record assembler and
//! the submitted event. Everything here is pure.

mod events;
mod field;
mod issue_type;
mod priority;
mod record;
mod screening;
mod validation;

pub use events::{ComplaintSubmitted, SubmittedComplaint, COMPLAINT_SUBMITTED};
pub use field::Field;
pub use issue_type::{Department, IssueType};
pub use priority::Priority;
pub use record::{ValidatedComplaint, SOURCE_CHAT};
pub(crate) use screening::contains_term;
pub use screening::{screen_description, Screening};
pub use validation::{
    validate_citizen_name, validate_complaint, validate_complaint_description, validate_email,
    validate_issue_type, validate_location, validate_phone, validate_priority, ComplaintDraft,
    FieldCheck, ValidationReport, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS,
    LOCATION_MAX_CHARS, LOCATION_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
