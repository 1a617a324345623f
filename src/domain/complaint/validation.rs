//! Field validators and the all-fields complaint check.
//!
//! Every validator is pure: it takes the raw candidate (or `None` when the
//! field was never collected) and returns a [`FieldCheck`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::field::Field;
use super::issue_type::IssueType;
use super::priority::Priority;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const LOCATION_MIN_CHARS: usize = 3;
pub const LOCATION_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

const NAME_PLACEHOLDERS: &[&str] = &[
    "test", "testing", "abc", "xyz", "name", "user", "demo", "sample", "dummy", "fake", "none",
    "null", "na", "n/a", "asdf", "qwerty",
];

const LOCATION_PLACEHOLDERS: &[&str] = &[
    "here", "there", "somewhere", "anywhere", "location", "address", "place", "test", "unknown",
    "none", "na", "n/a", "xyz", "abc",
];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]").expect("valid separator regex"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{1,3})?\d{3,15}$").expect("valid phone regex"));

/// Outcome of a single field validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub message: String,
}

impl FieldCheck {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Returns the trimmed value, or `None` if it is absent or blank.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_single_repeated_char(value: &str) -> bool {
    let mut chars = value.chars().filter(|c| !c.is_whitespace());
    match chars.next() {
        Some(first) => {
            let lower = first.to_lowercase().to_string();
            value.chars().filter(|c| !c.is_whitespace()).count() > 1
                && chars.all(|c| c.to_lowercase().to_string() == lower)
        }
        None => false,
    }
}

pub fn validate_citizen_name(name: Option<&str>) -> FieldCheck {
    let Some(name) = present(name) else {
        return FieldCheck::fail("Name is required");
    };

    let length = name.chars().count();
    if length < NAME_MIN_CHARS {
        return FieldCheck::fail("Name must be at least 2 characters long");
    }
    if length > NAME_MAX_CHARS {
        return FieldCheck::fail("Name must be at most 100 characters long");
    }
    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
    {
        return FieldCheck::fail("Name may only contain letters, spaces, hyphens and apostrophes");
    }
    if NAME_PLACEHOLDERS.contains(&name.to_lowercase().as_str()) {
        return FieldCheck::fail("Please provide your real name");
    }
    if is_single_repeated_char(name) {
        return FieldCheck::fail("Please provide your real name");
    }

    FieldCheck::pass("Valid name")
}

pub fn validate_location(location: Option<&str>) -> FieldCheck {
    let Some(location) = present(location) else {
        return FieldCheck::fail("Location is required");
    };

    let length = location.chars().count();
    if length < LOCATION_MIN_CHARS {
        return FieldCheck::fail("Location must be at least 3 characters long");
    }
    if length > LOCATION_MAX_CHARS {
        return FieldCheck::fail("Location must be at most 200 characters long");
    }
    if LOCATION_PLACEHOLDERS.contains(&location.to_lowercase().as_str()) {
        return FieldCheck::fail("Please provide a specific address or area");
    }
    if !location.chars().any(char::is_alphabetic) {
        return FieldCheck::fail("Location must contain at least one letter");
    }

    FieldCheck::pass("Valid location")
}

pub fn validate_complaint_description(description: Option<&str>) -> FieldCheck {
    let Some(description) = present(description) else {
        return FieldCheck::fail("Description is required");
    };

    let length = description.chars().count();
    if length < DESCRIPTION_MIN_CHARS {
        return FieldCheck::fail("Description must be at least 10 characters long");
    }
    if length > DESCRIPTION_MAX_CHARS {
        return FieldCheck::fail("Description must be at most 1000 characters long");
    }

    FieldCheck::pass("Valid description")
}

pub fn validate_issue_type(issue_type: Option<&str>) -> FieldCheck {
    let Some(issue_type) = present(issue_type) else {
        return FieldCheck::fail("Issue type is required");
    };

    if IssueType::parse(issue_type).is_some() {
        FieldCheck::pass("Valid issue type")
    } else {
        FieldCheck::fail("Issue type must be one of: road, electricity, water, garbage")
    }
}

/// Optional: an absent email is valid.
pub fn validate_email(email: Option<&str>) -> FieldCheck {
    let Some(email) = present(email) else {
        return FieldCheck::pass("No email provided");
    };

    if !email.contains('@') {
        return FieldCheck::fail("Email must contain '@' symbol");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return FieldCheck::fail("Please provide a valid email address");
    }

    FieldCheck::pass("Valid email")
}

/// Optional: an absent phone number is valid.
pub fn validate_phone(phone: Option<&str>) -> FieldCheck {
    let Some(phone) = present(phone) else {
        return FieldCheck::pass("No phone number provided");
    };

    let cleaned = PHONE_SEPARATORS.replace_all(phone, "");
    if !PHONE_PATTERN.is_match(&cleaned) {
        return FieldCheck::fail("Please provide a valid phone number");
    }

    let digits: Vec<char> = cleaned.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 3 && digits.iter().all(|d| *d == digits[0]) {
        return FieldCheck::fail("Please provide a valid phone number");
    }

    FieldCheck::pass("Valid phone number")
}

/// Optional: an absent priority is valid and defaults later.
pub fn validate_priority(priority: Option<&str>) -> FieldCheck {
    let Some(priority) = present(priority) else {
        return FieldCheck::pass("Priority defaults to medium");
    };

    if Priority::parse(priority).is_some() {
        FieldCheck::pass("Valid priority")
    } else {
        FieldCheck::fail("Priority must be one of: low, medium, high, urgent")
    }
}

/// Candidate complaint values as collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub issue_type: Option<IssueType>,
    pub complaint_description: Option<String>,
    pub location: Option<String>,
    pub citizen_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub priority: Option<Priority>,
}

/// Per-field results of [`validate_complaint`], in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    results: Vec<(Field, FieldCheck)>,
}

impl ValidationReport {
    /// Returns true if every checked field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, check)| check.valid)
    }

    pub fn get(&self, field: Field) -> Option<&FieldCheck> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, check)| check)
    }

    pub fn results(&self) -> &[(Field, FieldCheck)] {
        &self.results
    }

    /// Failing fields in report order; the first is the one to re-ask.
    pub fn failing_fields(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|(_, check)| !check.valid)
            .map(|(field, _)| *field)
            .collect()
    }
}

/// Runs every required validator and each optional one whose value is present.
pub fn validate_complaint(draft: &ComplaintDraft) -> ValidationReport {
    let mut results = vec![
        (
            Field::CitizenName,
            validate_citizen_name(draft.citizen_name.as_deref()),
        ),
        (Field::Location, validate_location(draft.location.as_deref())),
        (
            Field::ComplaintDescription,
            validate_complaint_description(draft.complaint_description.as_deref()),
        ),
        (
            Field::IssueType,
            validate_issue_type(draft.issue_type.map(|t| t.as_str())),
        ),
    ];

    if present(draft.contact_email.as_deref()).is_some() {
        results.push((
            Field::ContactEmail,
            validate_email(draft.contact_email.as_deref()),
        ));
    }
    if present(draft.contact_phone.as_deref()).is_some() {
        results.push((
            Field::ContactPhone,
            validate_phone(draft.contact_phone.as_deref()),
        ));
    }
    if let Some(priority) = draft.priority {
        results.push((Field::Priority, validate_priority(Some(priority.as_str()))));
    }

    ValidationReport { results }
}
