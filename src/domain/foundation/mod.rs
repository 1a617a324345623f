//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the complaint domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ComplaintId, SessionId, MAX_SESSION_ID_LENGTH};
pub use timestamp::Timestamp;
