//! Conversation module - The form-filling dialogue.
//!
//! Holds the per-session state, the extraction heuristics, the message
//! templates and the pure dialogue engine that ties them together.

mod engine;
mod extractor;
pub mod prompts;
mod state;

pub use engine::{DialogueConfig, DialogueEngine, TurnOutcome};
pub use extractor::{
    extract_contact, extract_description, extract_location, extract_name,
    opportunistic_description, ContactExtraction,
};
pub use state::{ChatMessage, ConversationState, MessageRole};
