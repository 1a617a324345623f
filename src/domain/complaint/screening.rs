//! Description screening.
//!
//! Keyword-based check that a free-text description is a civic
//! infrastructure complaint at all. Terms are matched as whole words so
//! that short terms ("app", "tax") do not fire inside longer words.

/// Result of screening a complaint description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Accepted,
    /// Fewer than three words; the description question is asked again.
    Brief,
    OutOfScope {
        reason: &'static str,
        suggestion: &'static str,
    },
    Placeholder,
    Repetitive,
}

impl Screening {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Screening::Accepted)
    }
}

struct ExcludedTopic {
    terms: &'static [&'static str],
    reason: &'static str,
    suggestion: &'static str,
}

const EXCLUDED_TOPICS: &[ExcludedTopic] = &[
    ExcludedTopic {
        terms: &[
            "robbery", "theft", "stolen", "burglary", "assault", "murder", "rape", "violence",
            "crime", "criminal", "police", "law enforcement", "court", "legal", "arrest", "jail",
            "prison", "suspect", "victim", "evidence",
        ],
        reason: "Crime and law enforcement issues",
        suggestion: "Please contact your local police station or emergency services at 911/100/112",
    },
    ExcludedTopic {
        terms: &[
            "job", "employment", "salary", "boss", "colleague", "workplace", "business",
            "company", "contract", "agreement", "payment", "money", "financial", "bank", "loan",
            "debt", "tax", "insurance", "medical", "health", "doctor", "hospital", "medicine",
            "treatment",
        ],
        reason: "Personal, business, or employment matters",
        suggestion: "This system handles only civic infrastructure complaints. For personal/business issues, contact relevant authorities or HR department",
    },
    ExcludedTopic {
        terms: &[
            "marriage", "divorce", "family", "children", "parent", "spouse", "girlfriend",
            "boyfriend", "friend", "neighbor", "argument", "fight", "relationship", "love",
            "breakup", "affair", "cheating",
        ],
        reason: "Personal relationship or family matters",
        suggestion: "This system is for reporting civic infrastructure problems only",
    },
    ExcludedTopic {
        terms: &[
            "internet", "wifi", "mobile", "cellphone", "computer", "laptop", "software", "app",
            "website", "social media", "facebook", "whatsapp", "spam", "virus", "hack",
            "password",
        ],
        reason: "Technology or communication issues",
        suggestion: "For tech/communication issues, contact your service provider or IT support",
    },
    ExcludedTopic {
        terms: &[
            "school", "college", "university", "teacher", "student", "exam", "grade", "class",
            "lesson", "homework", "tuition", "education", "admission", "scholarship",
        ],
        reason: "Education or school-related matters",
        suggestion: "Please contact your educational institution administration",
    },
    ExcludedTopic {
        terms: &[
            "ministry", "bureaucracy", "corruption", "bribery", "scam", "fraud",
            "complaint against", "petition", "license", "permit", "certificate",
        ],
        reason: "Government administration complaints",
        suggestion: "For government service complaints, use the appropriate government portal or contact the relevant department directly",
    },
];

const CIVIC_TERMS: &[&str] = &[
    // roads and traffic
    "road", "street", "pothole", "traffic", "lane", "pavement", "sidewalk", "asphalt", "highway",
    "intersection", "signal", "speed bump", "parking", "curb", "crosswalk", "bridge",
    "construction", "repair", "damage", "damaged",
    // electricity
    "electricity", "power", "electrical", "electric", "voltage", "outage", "blackout", "wiring",
    "wire", "cable", "pole", "transformer", "meter", "fuse", "light", "lights", "lighting",
    "streetlight", "bulb", "sparking",
    // water
    "water", "plumbing", "pipe", "leak", "leaking", "leakage", "tap", "faucet", "drainage",
    "sewer", "sewage", "toilet", "pressure", "supply", "burst", "broken", "flood", "overflow",
    "overflowing", "blockage", "clog", "drain",
    // garbage
    "garbage", "waste", "trash", "rubbish", "bin", "bins", "dustbin", "collection", "collected",
    "pickup", "dumpster", "landfill", "recycling", "litter", "dirty", "smell", "odor",
    "sanitation", "pest", "rat", "rats", "mosquito",
    // public safety
    "unsafe", "dangerous", "hazard", "accident", "injury",
];

const PLACEHOLDER_TERMS: &[&str] = &[
    "test", "testing", "abc", "xyz", "123", "sample", "demo", "lorem ipsum", "dummy", "fake",
    "placeholder",
];

/// Whole-word (or whole-phrase) containment on already lowercased text.
pub(crate) fn contains_term(text: &str, term: &str) -> bool {
    text.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(text, term))
}

/// Screens a description before it is accepted.
pub fn screen_description(text: &str) -> Screening {
    let lower = text.trim().to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    if words.len() < 3 {
        return Screening::Brief;
    }

    if let Some(topic) = EXCLUDED_TOPICS
        .iter()
        .find(|topic| contains_any(&lower, topic.terms))
    {
        return Screening::OutOfScope {
            reason: topic.reason,
            suggestion: topic.suggestion,
        };
    }

    if contains_any(&lower, PLACEHOLDER_TERMS) {
        return Screening::Placeholder;
    }

    if words.len() > 5 {
        let mut unique = words.clone();
        unique.sort_unstable();
        unique.dedup();
        if unique.len() * 2 < words.len() {
            return Screening::Repetitive;
        }
    }

    if !contains_any(&lower, CIVIC_TERMS) {
        return Screening::OutOfScope {
            reason: "Unclear or unrelated complaint",
            suggestion: "Please provide details about civic infrastructure issues like roads, electricity, water, or garbage problems",
        };
    }

    Screening::Accepted
}
