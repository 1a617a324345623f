//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Maximum accepted length of a session key.
pub const MAX_SESSION_ID_LENGTH: usize = 128;

/// Opaque key identifying one citizen's complaint conversation.
///
/// Session ids are chosen by the client (the chat frontend), so the only
/// constraints are that they are non-blank and reasonably short.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Key used when a client does not send one.
    pub const DEFAULT: &'static str = "default";

    /// Creates a SessionId, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        if trimmed.chars().count() > MAX_SESSION_ID_LENGTH {
            return Err(ValidationError::invalid_format(
                "session_id",
                format!("must be at most {} characters", MAX_SESSION_ID_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the shared fallback session.
    pub fn default_session() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for a persisted complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    /// Creates a new random ComplaintId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ComplaintId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ComplaintId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComplaintId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
