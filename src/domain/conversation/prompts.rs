//! Assistant message templates.

use crate::domain::complaint::{Field, IssueType};

/// Label used when no category has been chosen.
const GENERAL_LABEL: &str = "general";

pub const CONFIRMATION: &str = "Thank you! Your complaint has been recorded and submitted. We will look into this issue and get back to you soon.";

pub const ALREADY_SUBMITTED: &str = "Your complaint has already been submitted. If you would like to report another issue, please start a new complaint.";

/// Sent when free text arrives before a category is chosen.
pub fn category_required() -> String {
    let mut message = String::from(
        "Please select a complaint category first by clicking one of the buttons above. \
         You cannot type your complaint until you choose a category.\n\n\
         Available categories:",
    );
    for issue in IssueType::ALL {
        message.push_str("\n• ");
        message.push_str(issue.option_label());
    }
    message
}

/// The question for a field, phrased for the chosen category when possible.
pub fn question(field: Field, issue: Option<IssueType>) -> String {
    match field {
        Field::IssueType => {
            "What type of issue are you reporting? Please choose from:\n\
             • Road problems (potholes, traffic issues)\n\
             • Electricity issues (power outages, electrical problems)\n\
             • Water problems (leaks, supply issues)\n\
             • Garbage/waste issues (collection problems)"
                .to_string()
        }
        Field::ComplaintDescription => description_question(issue).to_string(),
        Field::Location => location_question(issue).to_string(),
        Field::CitizenName => "What is your full name? Please provide your complete name (at least 2 characters, e.g., 'John Smith' or 'Maria Gonzalez').".to_string(),
        Field::ContactInfo => "How can we contact you about this complaint? Please provide a valid email address (like 'john@example.com') or phone number (like '555-0123'), or say 'skip'.".to_string(),
        Field::ContactEmail => "Please provide your email address so we can contact you about this complaint (e.g., 'john.smith@gmail.com' or 'maria.jones@company.com').".to_string(),
        Field::ContactPhone => "Please provide your phone number for contact (at least 3 digits, e.g., '555-0123', '123-456-7890', or '+1-555-012-3456').".to_string(),
        Field::Priority => "How urgent is this issue? Please choose: low, medium, high, or urgent.".to_string(),
    }
}

fn description_question(issue: Option<IssueType>) -> &'static str {
    match issue {
        Some(IssueType::Road) => "Please provide a brief explanation of the road/traffic problem (at least 10 characters). For example: 'Large pothole causing vehicle damage' or 'Traffic light malfunctioning at intersection'.",
        Some(IssueType::Electricity) => "Please provide a brief explanation of the electricity/power issue (at least 10 characters). For example: 'Power outage in apartment for 2 hours' or 'Sparking electrical panel in hallway'.",
        Some(IssueType::Water) => "Please provide a brief explanation of the water/plumbing problem (at least 10 characters). For example: 'Leaking pipe under kitchen sink' or 'No water pressure on 2nd floor'.",
        Some(IssueType::Garbage) => "Please provide a brief explanation of the garbage/waste issue (at least 10 characters). For example: 'Garbage not collected for 3 days' or 'Overflowing waste bins in area'.",
        None => "Please provide a brief explanation of the problem (at least 10 characters).",
    }
}

fn location_question(issue: Option<IssueType>) -> &'static str {
    match issue {
        Some(IssueType::Road) => "Where is the road/traffic issue located? Please provide the street address or area (e.g., '123 Main Street' or 'Downtown intersection of Oak and Pine').",
        Some(IssueType::Electricity) => "Where is the electricity/power issue occurring? Please provide the address or location (e.g., '456 Oak Avenue, Apartment 3B' or 'Building 5, Floor 2').",
        Some(IssueType::Water) => "Where is the water/plumbing problem? Please provide the address or location (e.g., '789 Pine Road' or 'Community Center bathroom').",
        Some(IssueType::Garbage) => "Where do you need garbage/waste collection? Please provide the address or area (e.g., '234 Elm Street' or 'Community Park pavilion').",
        None => "Where is this issue located? Please provide a specific address or area (at least 3 characters).",
    }
}

/// One bullet explaining how to fix a failing field.
pub fn correction_hint(field: Field, issue: Option<IssueType>) -> String {
    let hint = match (field, issue) {
        (Field::CitizenName, _) => "• Name: Please provide your full name (at least 2 characters, letters only, e.g., 'John Smith')",
        (Field::Location, Some(IssueType::Road)) => "• Location: Please provide the street address or area (at least 3 characters, e.g., '123 Main Street' or 'Downtown Area')",
        (Field::Location, Some(IssueType::Electricity)) => "• Location: Please provide where the power issue is occurring (at least 3 characters, e.g., '456 Oak Avenue, Apartment 3B')",
        (Field::Location, Some(IssueType::Water)) => "• Location: Please provide where the water problem is (at least 3 characters, e.g., '789 Pine Road' or 'Building 5, Floor 2')",
        (Field::Location, Some(IssueType::Garbage)) => "• Location: Please provide where garbage collection is needed (at least 3 characters, e.g., '234 Elm Street' or 'Community Park')",
        (Field::Location, None) => "• Location: Please provide the address or area (at least 3 characters)",
        (Field::ComplaintDescription, Some(IssueType::Road)) => "• Description: Please describe the road/traffic issue in detail (at least 10 characters, e.g., 'There is a large pothole causing damage to vehicles')",
        (Field::ComplaintDescription, Some(IssueType::Electricity)) => "• Description: Please describe the electricity/power problem (at least 10 characters, e.g., 'Power has been out for 2 hours, affecting multiple apartments')",
        (Field::ComplaintDescription, Some(IssueType::Water)) => "• Description: Please describe the water/plumbing issue (at least 10 characters, e.g., 'Water is leaking from the pipe under the sink')",
        (Field::ComplaintDescription, Some(IssueType::Garbage)) => "• Description: Please describe the garbage/waste issue (at least 10 characters, e.g., 'Garbage has not been collected for 3 days and bins are overflowing')",
        (Field::ComplaintDescription, None) => "• Description: Please provide more details about your complaint (at least 10 characters)",
        (Field::ContactEmail, _) => "• Email: Please provide a valid email address for contact (e.g., 'john@example.com' or 'mary.smith@gmail.com'), or say 'skip'",
        (Field::ContactPhone, _) => "• Phone: Please provide a valid phone number (at least 3 digits, e.g., '555-0123' or '+1-555-012-3456'), or say 'skip'",
        (Field::Priority, _) => "• Priority: Please choose low, medium, high, or urgent",
        (Field::IssueType | Field::ContactInfo, _) => "• Category: Please select one of the offered complaint categories",
    };
    hint.to_string()
}

/// Lists every failing field in one message.
pub fn validation_summary(failing: &[Field], issue: Option<IssueType>) -> String {
    let label = issue.map_or(GENERAL_LABEL, |i| i.context_label());
    let hints: Vec<String> = failing
        .iter()
        .map(|field| correction_hint(*field, issue))
        .collect();

    format!(
        "I found some issues with your {label} complaint information that need to be corrected:\n\n\
         {}\n\n\
         Please provide the corrected information for the items above, and I'll submit your \
         {label} complaint right away. Let's fix these together:",
        hints.join("\n")
    )
}

/// Explains why a description was not accepted and asks again.
pub fn screening_rejection(reason: &str, suggestion: &str, issue: Option<IssueType>) -> String {
    format!(
        "I'm sorry, I can't accept that description. {reason}. {suggestion}.\n\n{}",
        description_question(issue)
    )
}
