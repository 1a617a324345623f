//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult,
    ResetSessionCommand, ResetSessionHandler, DEFAULT_COLLABORATOR_TIMEOUT,
};
