//! Complaint categories and the departments that handle them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four civic infrastructure categories the assistant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Road,
    Electricity,
    Water,
    Garbage,
}

/// Category phrases offered to the citizen, full label first then the
/// short prefix. Matching is a case-insensitive substring test.
const CATEGORY_PHRASES: [(IssueType, &str, &str); 4] = [
    (IssueType::Road, "road/traffic issues", "road/traffic"),
    (IssueType::Electricity, "electricity/power problems", "electricity/power"),
    (IssueType::Water, "water/plumbing issues", "water/plumbing"),
    (IssueType::Garbage, "garbage/waste collection", "garbage/waste"),
];

impl IssueType {
    /// All categories in the order they are offered.
    pub const ALL: [IssueType; 4] = [
        IssueType::Road,
        IssueType::Electricity,
        IssueType::Water,
        IssueType::Garbage,
    ];

    /// Recognizes a category selection inside an utterance.
    ///
    /// Only the offered category phrases count; free text such as
    /// "there is a pothole" does not select a category.
    pub fn from_category_phrase(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        CATEGORY_PHRASES
            .iter()
            .find(|(_, full, short)| lower.contains(full) || lower.contains(short))
            .map(|(issue, _, _)| *issue)
    }

    /// Parses any accepted spelling: short token, legacy `*_issue` token,
    /// persistence code or category phrase.
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|issue| {
                lower == issue.as_str()
                    || lower == issue.legacy_token()
                    || lower == issue.persistence_code()
            })
            .or_else(|| Self::from_category_phrase(&lower))
    }

    /// Short token used in notification payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Road => "road",
            IssueType::Electricity => "electricity",
            IssueType::Water => "water",
            IssueType::Garbage => "garbage",
        }
    }

    /// Identifier stored in the complaints table.
    pub fn persistence_code(&self) -> &'static str {
        match self {
            IssueType::Road => "road_traffic",
            IssueType::Electricity => "electricity_power",
            IssueType::Water => "water_plumbing",
            IssueType::Garbage => "garbage_waste",
        }
    }

    fn legacy_token(&self) -> &'static str {
        match self {
            IssueType::Road => "road_issue",
            IssueType::Electricity => "electricity_issue",
            IssueType::Water => "water_issue",
            IssueType::Garbage => "garbage_issue",
        }
    }

    /// Human label used inside assistant messages.
    pub fn context_label(&self) -> &'static str {
        match self {
            IssueType::Road => "road/traffic",
            IssueType::Electricity => "electricity/power",
            IssueType::Water => "water/plumbing",
            IssueType::Garbage => "garbage/waste collection",
        }
    }

    /// The label shown on the category selection buttons.
    pub fn option_label(&self) -> &'static str {
        match self {
            IssueType::Road => "Road/Traffic Issues",
            IssueType::Electricity => "Electricity/Power Problems",
            IssueType::Water => "Water/Plumbing Issues",
            IssueType::Garbage => "Garbage/Waste Collection",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Municipal department a complaint is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Roads,
    Electricity,
    Water,
    Sanitation,
    General,
}

impl Department {
    /// Fixed routing table from category to department.
    pub fn for_issue(issue: Option<IssueType>) -> Self {
        match issue {
            Some(IssueType::Road) => Department::Roads,
            Some(IssueType::Electricity) => Department::Electricity,
            Some(IssueType::Water) => Department::Water,
            Some(IssueType::Garbage) => Department::Sanitation,
            None => Department::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Roads => "roads",
            Department::Electricity => "electricity",
            Department::Water => "water",
            Department::Sanitation => "sanitation",
            Department::General => "general",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
