//! Field extraction from free-text replies.
//!
//! Light-weight pattern matching that turns the citizen's answer into a
//! candidate value for the field that was asked for. Nothing here decides
//! validity; candidates go through the validators before submission.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::complaint::contains_term;

/// Name candidates from "my name is X" style phrasing.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:\bi'?m|\bi am|\bmy name is|\bthis is|\bname is)\s+([a-z][a-z'-]*(?:\s+[a-z][a-z'-]*){0,2})",
        r"(?i)\b([a-z][a-z'-]*(?:\s+[a-z][a-z'-]*){0,2})\s+(?:here|speaking)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid name pattern"))
    .collect()
});

/// Location candidates from "at X" / "location: X" phrasing.
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:at|in|near|on)\s+([a-z][a-z\s,]*?)(?:\.|,|$)",
        r"(?i)\blocation[:\s]+([a-z0-9][a-z0-9\s,]*?)(?:\.|,|$)",
        r"(?i)\baddress[:\s]+([a-z0-9][a-z0-9\s,]*?)(?:\.|,|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid location pattern"))
    .collect()
});

static EMAIL_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

static PHONE_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s().-]*\d").expect("valid phone pattern"));

/// Words that mark an answer as a complaint rather than a name.
const NAME_EXCLUDED_KEYWORDS: &[&str] = &[
    "issue",
    "problem",
    "complaint",
    "road",
    "water",
    "electricity",
    "garbage",
    "location",
    "address",
];

/// Replies that decline to give contact details.
const CONTACT_OPT_OUTS: &[&str] = &[
    "no contact info provided",
    "no contact",
    "none",
    "skip",
    "optional",
    "no email",
    "no phone",
];

/// Words that suggest an unprompted message describes a problem.
const COMPLAINT_KEYWORDS: &[&str] = &[
    "problem",
    "issue",
    "broken",
    "damaged",
    "not working",
    "need",
    "help",
];

const NAME_FALLBACK_MAX_WORDS: usize = 3;
const LOCATION_FALLBACK_MIN_CHARS: usize = 3;
const DESCRIPTION_ACCEPT_MIN_CHARS: usize = 10;
const OPPORTUNISTIC_MIN_CHARS: usize = 30;

/// What a reply to the contact question contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactExtraction {
    /// The citizen declined; contact fields stay unset.
    OptOut,
    Email(String),
    Phone(String),
    /// Nothing usable; the optional step is passed over.
    Nothing,
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().trim_end_matches(',').trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

pub fn extract_name(text: &str) -> Option<String> {
    if let Some(name) = first_capture(&NAME_PATTERNS, text) {
        return Some(name);
    }

    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let short = trimmed.split_whitespace().count() <= NAME_FALLBACK_MAX_WORDS;
    let mentions_issue = NAME_EXCLUDED_KEYWORDS.iter().any(|k| contains_term(&lower, k));

    (short && !mentions_issue && !trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn extract_location(text: &str) -> Option<String> {
    if let Some(location) = first_capture(&LOCATION_PATTERNS, text) {
        return Some(location);
    }

    let trimmed = text.trim();
    (trimmed.chars().count() > LOCATION_FALLBACK_MIN_CHARS).then(|| trimmed.to_string())
}

/// Accepts the whole reply as the description if it is long enough.
pub fn extract_description(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (trimmed.chars().count() > DESCRIPTION_ACCEPT_MIN_CHARS).then(|| trimmed.to_string())
}

pub fn extract_contact(text: &str) -> ContactExtraction {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    if CONTACT_OPT_OUTS.contains(&lower.as_str()) {
        return ContactExtraction::OptOut;
    }
    if let Some(email) = EMAIL_IN_TEXT.find(trimmed) {
        return ContactExtraction::Email(email.as_str().to_string());
    }
    if let Some(phone) = PHONE_IN_TEXT.find(trimmed) {
        return ContactExtraction::Phone(phone.as_str().to_string());
    }

    // Looks like an attempt that did not match; keep it so validation can
    // explain what is wrong.
    if (trimmed.contains('@') || lower.contains("email")) && trimmed.chars().count() > 3 {
        ContactExtraction::Email(trimmed.to_string())
    } else if trimmed.chars().any(|c| c.is_ascii_digit()) && trimmed.chars().count() >= 3 {
        ContactExtraction::Phone(trimmed.to_string())
    } else {
        ContactExtraction::Nothing
    }
}

/// Picks up a description the citizen volunteered without being asked.
pub fn opportunistic_description(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.chars().count() <= OPPORTUNISTIC_MIN_CHARS {
        return None;
    }
    let lower = trimmed.to_lowercase();
    COMPLAINT_KEYWORDS
        .iter()
        .any(|k| lower.contains(k))
        .then(|| trimmed.to_string())
}
