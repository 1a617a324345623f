//! Complaint urgency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a complaint should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Parses an exact level name (case-insensitive).
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.as_str() == lower)
    }

    /// Maps a free-form answer to a level.
    ///
    /// Unrecognized answers fall back to `Medium` rather than re-asking.
    pub fn from_utterance(text: &str) -> Self {
        if let Some(exact) = Self::parse(text) {
            return exact;
        }

        let lower = text.to_lowercase();
        if lower.contains("urgent") || lower.contains("emergency") {
            Priority::Urgent
        } else if lower.contains("high") || lower.contains("important") {
            Priority::High
        } else if lower.contains("low") || lower.contains("minor") {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn exact_level_names_win() {
        assert_eq!(Priority::from_utterance("LOW"), Priority::Low);
        assert_eq!(Priority::from_utterance(" high "), Priority::High);
        assert_eq!(Priority::from_utterance("urgent"), Priority::Urgent);
        assert_eq!(Priority::from_utterance("medium"), Priority::Medium);
    }

    #[test]
    fn keywords_map_to_levels() {
        assert_eq!(
            Priority::from_utterance("this is an emergency!"),
            Priority::Urgent
        );
        assert_eq!(
            Priority::from_utterance("pretty important to me"),
            Priority::High
        );
        assert_eq!(Priority::from_utterance("just a minor thing"), Priority::Low);
    }

    #[test]
    fn unclear_answer_defaults_to_medium() {
        assert_eq!(Priority::from_utterance("not sure"), Priority::Medium);
    }

    #[test]
    fn parse_rejects_unknown_levels() {
        assert_eq!(Priority::parse("critical"), None);
    }
}
