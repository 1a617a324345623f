//! Dialogue engine.
//!
//! A deterministic form-filling state machine. The "state" is the set of
//! fields still missing; each user turn either fills the field that was
//! asked for, or is answered with the next question, a correction request
//! or the confirmation. The engine performs no I/O: persisting and
//! notifying happen in the application layer when a turn returns
//! [`TurnOutcome::Completed`].

use serde::Deserialize;

use crate::domain::complaint::{
    screen_description, Field, IssueType, Priority, Screening, ValidatedComplaint,
};

use super::extractor::{
    extract_contact, extract_description, extract_location, extract_name,
    opportunistic_description, ContactExtraction,
};
use super::prompts;
use super::state::{ChatMessage, ConversationState};

/// Optional dialogue steps.
///
/// With everything off the flow collects exactly category, description,
/// location and name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DialogueConfig {
    /// Ask for an email or phone number after the name.
    #[serde(default)]
    pub collect_contact: bool,

    /// Ask how urgent the issue is before submitting.
    #[serde(default)]
    pub ask_priority: bool,

    /// Screen descriptions for out-of-scope or junk content.
    #[serde(default)]
    pub screen_descriptions: bool,
}

/// What a turn did, together with the reply appended to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Not a user message; state untouched.
    Ignored,
    /// No category yet and none recognized.
    CategoryRequired { reply: String },
    /// Asked for the next field.
    Question { field: Field, reply: String },
    /// A description was turned away by screening.
    Screened { field: Field, reply: String },
    /// Everything collected but some fields failed validation.
    NeedsCorrection { failing: Vec<Field>, reply: String },
    /// All fields valid; the record is ready to persist.
    Completed {
        complaint: Box<ValidatedComplaint>,
        reply: String,
    },
    /// The conversation already produced a complaint.
    AlreadySubmitted { reply: String },
}

impl TurnOutcome {
    pub fn reply(&self) -> Option<&str> {
        match self {
            TurnOutcome::Ignored => None,
            TurnOutcome::CategoryRequired { reply }
            | TurnOutcome::Question { reply, .. }
            | TurnOutcome::Screened { reply, .. }
            | TurnOutcome::NeedsCorrection { reply, .. }
            | TurnOutcome::Completed { reply, .. }
            | TurnOutcome::AlreadySubmitted { reply } => Some(reply),
        }
    }

    /// Short tag for logs and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            TurnOutcome::Ignored => "ignored",
            TurnOutcome::CategoryRequired { .. } => "category_required",
            TurnOutcome::Question { .. } => "question",
            TurnOutcome::Screened { .. } => "screened",
            TurnOutcome::NeedsCorrection { .. } => "needs_correction",
            TurnOutcome::Completed { .. } => "completed",
            TurnOutcome::AlreadySubmitted { .. } => "already_submitted",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TurnOutcome::Completed { .. })
    }
}

/// Drives one conversation turn at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueEngine {
    config: DialogueConfig,
}

impl DialogueEngine {
    pub fn new(config: DialogueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Applies one message to the state and returns what happened.
    pub fn process(&self, state: &mut ConversationState, message: ChatMessage) -> TurnOutcome {
        if !message.is_user() {
            return TurnOutcome::Ignored;
        }

        let text = message.content.clone();
        state.push_message(message);

        if state.completed {
            return reply(
                state,
                prompts::ALREADY_SUBMITTED.to_string(),
                |reply| TurnOutcome::AlreadySubmitted { reply },
            );
        }

        if state.issue_type.is_none() {
            match IssueType::from_category_phrase(&text) {
                Some(issue) => {
                    state.issue_type = Some(issue);
                    state.last_asked_field = None;
                    // The same message may already describe the problem.
                    self.pick_up_unprompted_description(state, &text);
                }
                None => {
                    return reply(state, prompts::category_required(), |reply| {
                        TurnOutcome::CategoryRequired { reply }
                    });
                }
            }
        } else if let Some(outcome) = self.apply_answer(state, &text) {
            return outcome;
        }

        self.advance(state)
    }

    /// Interprets the utterance as the answer to the pending question.
    ///
    /// Returns an outcome only when the answer was turned away outright.
    fn apply_answer(&self, state: &mut ConversationState, text: &str) -> Option<TurnOutcome> {
        let Some(field) = state.last_asked_field else {
            self.pick_up_unprompted_description(state, text);
            return None;
        };

        match field {
            Field::CitizenName => state.citizen_name = extract_name(text),
            Field::Location => state.location = extract_location(text),
            Field::ComplaintDescription => return self.apply_description(state, text),
            Field::ContactInfo | Field::ContactEmail | Field::ContactPhone => {
                apply_contact(state, field, text)
            }
            Field::Priority => {
                state.priority = Some(Priority::from_utterance(text));
                state.settle(Field::Priority);
            }
            // Category is only ever set by a category phrase.
            Field::IssueType => {}
        }
        None
    }

    /// Keeps a volunteered description, unless screening would turn it away.
    fn pick_up_unprompted_description(&self, state: &mut ConversationState, text: &str) {
        if state.complaint_description.is_some() {
            return;
        }
        state.complaint_description = opportunistic_description(text).filter(|description| {
            !self.config.screen_descriptions
                || screen_description(description) == Screening::Accepted
        });
    }

    fn apply_description(&self, state: &mut ConversationState, text: &str) -> Option<TurnOutcome> {
        let candidate = extract_description(text);

        if self.config.screen_descriptions {
            if let Some(description) = candidate.as_deref() {
                let message = match screen_description(description) {
                    Screening::Accepted => None,
                    Screening::Brief => Some(prompts::question(
                        Field::ComplaintDescription,
                        state.issue_type,
                    )),
                    Screening::OutOfScope { reason, suggestion } => Some(
                        prompts::screening_rejection(reason, suggestion, state.issue_type),
                    ),
                    Screening::Placeholder => Some(prompts::screening_rejection(
                        "Test or placeholder complaint",
                        "Please submit a real civic infrastructure complaint",
                        state.issue_type,
                    )),
                    Screening::Repetitive => Some(prompts::screening_rejection(
                        "Excessive word repetition",
                        "Please describe your complaint clearly without repeating words unnecessarily",
                        state.issue_type,
                    )),
                };

                if let Some(message) = message {
                    state.complaint_description = None;
                    state.last_asked_field = Some(Field::ComplaintDescription);
                    return Some(reply(state, message, |reply| TurnOutcome::Screened {
                        field: Field::ComplaintDescription,
                        reply,
                    }));
                }
            }
        }

        state.complaint_description = candidate;
        None
    }

    /// Asks the next question, or validates and completes.
    fn advance(&self, state: &mut ConversationState) -> TurnOutcome {
        if let Some(field) = state.missing_required_fields().first().copied() {
            return self.ask(state, field);
        }

        if self.config.collect_contact
            && !state.is_settled(Field::ContactInfo)
            && !state.has_value(Field::ContactInfo)
        {
            return self.ask(state, Field::ContactInfo);
        }

        if self.config.ask_priority && !state.is_settled(Field::Priority) && state.priority.is_none()
        {
            return self.ask(state, Field::Priority);
        }

        match ValidatedComplaint::assemble(state.session_id.clone(), &state.draft()) {
            Ok(complaint) => {
                state.completed = true;
                state.last_asked_field = None;
                reply(state, prompts::CONFIRMATION.to_string(), |reply| {
                    TurnOutcome::Completed {
                        complaint: Box::new(complaint),
                        reply,
                    }
                })
            }
            Err(report) => {
                let failing = report.failing_fields();
                state.last_asked_field = failing.first().copied();
                let message = prompts::validation_summary(&failing, state.issue_type);
                reply(state, message, |reply| TurnOutcome::NeedsCorrection {
                    failing,
                    reply,
                })
            }
        }
    }

    fn ask(&self, state: &mut ConversationState, field: Field) -> TurnOutcome {
        state.last_asked_field = Some(field);
        let question = prompts::question(field, state.issue_type);
        reply(state, question, |reply| TurnOutcome::Question { field, reply })
    }
}

/// Contact answers never block: whatever happens, the contact step is done.
fn apply_contact(state: &mut ConversationState, asked: Field, text: &str) {
    // A correction replaces the value that failed.
    if asked != Field::ContactInfo {
        state.set_text_value(asked, None);
    }

    match extract_contact(text) {
        ContactExtraction::OptOut => {
            state.contact_email = None;
            state.contact_phone = None;
        }
        ContactExtraction::Email(email) => state.contact_email = Some(email),
        ContactExtraction::Phone(phone) => state.contact_phone = Some(phone),
        ContactExtraction::Nothing => {}
    }
    state.settle(Field::ContactInfo);
}

/// Appends the reply to the transcript and wraps it in an outcome.
fn reply(
    state: &mut ConversationState,
    message: String,
    outcome: impl FnOnce(String) -> TurnOutcome,
) -> TurnOutcome {
    state.push_message(ChatMessage::assistant(message.clone()));
    outcome(message)
}
