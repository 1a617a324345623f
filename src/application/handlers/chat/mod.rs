//! Chat command handlers.
//!
//! The two operations the transport exposes: process a message and reset
//! a session.

mod handle_turn;
mod reset_session;

pub use handle_turn::{
    HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult,
    DEFAULT_COLLABORATOR_TIMEOUT,
};
pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
