//! HTTP DTOs for the chat endpoints.
//!
//! Field names match what the existing web frontend sends and expects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

/// Reply sent whenever a turn cannot be processed.
pub const APOLOGY_REPLY: &str =
    "Sorry, I encountered an error. Please try again or start a new complaint.";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One citizen message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Request to start a session over. The body may be omitted entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Resolves the optional wire session id, defaulting when absent or blank.
pub fn resolve_session_id(raw: Option<&str>) -> Result<SessionId, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SessionId::default_session()),
        Some(id) => SessionId::new(id).map_err(|e| e.to_string()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatResponse {
    pub fn apology() -> Self {
        Self {
            reply: APOLOGY_REPLY.to_string(),
        }
    }
}

/// Status envelope used by reset and health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl StatusResponse {
    pub fn reset_ok() -> Self {
        Self {
            status: "success".to_string(),
            message: Some("Session reset successfully".to_string()),
            version: None,
        }
    }

    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Error body for requests the service could not carry out.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
