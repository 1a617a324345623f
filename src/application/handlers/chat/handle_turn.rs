//! HandleTurnHandler - Runs one citizen message through the dialogue.
//!
//! Holds the session lock for the whole read-modify-write so concurrent
//! messages for one session are applied one after the other. When a turn
//! completes the complaint, the repository and notifier are called with a
//! bounded timeout; their failures are logged and never change the reply.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::domain::complaint::{ComplaintSubmitted, ValidatedComplaint};
use crate::domain::conversation::{ChatMessage, DialogueEngine, TurnOutcome};
use crate::domain::foundation::{ComplaintId, DomainError, ErrorCode, SessionId};
use crate::ports::{ComplaintNotifier, ComplaintRepository, SessionStore, SessionStoreError};

/// Upper bound for each collaborator call.
pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Command carrying one user message.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub session_id: SessionId,
    pub text: String,
}

/// Result of a processed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleTurnResult {
    pub reply: String,
    pub outcome: &'static str,
    pub completed: bool,
    pub complaint_id: Option<ComplaintId>,
}

/// Errors that abort a turn.
#[derive(Debug, Error)]
pub enum HandleTurnError {
    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),

    #[error("Session state error: {0}")]
    State(#[from] DomainError),
}

/// Handler for conversation turns.
pub struct HandleTurnHandler {
    sessions: Arc<dyn SessionStore>,
    repository: Arc<dyn ComplaintRepository>,
    notifier: Arc<dyn ComplaintNotifier>,
    engine: DialogueEngine,
    collaborator_timeout: Duration,
}

impl HandleTurnHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        repository: Arc<dyn ComplaintRepository>,
        notifier: Arc<dyn ComplaintNotifier>,
        engine: DialogueEngine,
    ) -> Self {
        Self {
            sessions,
            repository,
            notifier,
            engine,
            collaborator_timeout: DEFAULT_COLLABORATOR_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout for the repository and notifier.
    pub fn with_collaborator_timeout(mut self, collaborator_timeout: Duration) -> Self {
        self.collaborator_timeout = collaborator_timeout;
        self
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<HandleTurnResult, HandleTurnError> {
        let _guard = self.sessions.lock(&cmd.session_id).await;

        let mut state = self.sessions.get(&cmd.session_id).await?;
        if state.session_id != cmd.session_id {
            return Err(DomainError::new(
                ErrorCode::SessionStateCorrupted,
                "Stored state belongs to a different session",
            )
            .with_detail("session_id", cmd.session_id.as_str())
            .with_detail("stored_session_id", state.session_id.as_str())
            .into());
        }

        let outcome = self.engine.process(&mut state, ChatMessage::user(cmd.text));

        let mut complaint_id = None;
        if let TurnOutcome::Completed { complaint, .. } = &outcome {
            complaint_id = self.submit(&cmd.session_id, complaint).await;
            state.submitted_complaint_id = complaint_id;
        }

        self.sessions.put(&cmd.session_id, state).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            outcome = outcome.kind(),
            "Processed conversation turn"
        );

        Ok(HandleTurnResult {
            reply: outcome.reply().unwrap_or_default().to_string(),
            outcome: outcome.kind(),
            completed: outcome.is_completed(),
            complaint_id,
        })
    }

    /// Persists then announces the complaint. Never fails the turn.
    async fn submit(
        &self,
        session_id: &SessionId,
        complaint: &ValidatedComplaint,
    ) -> Option<ComplaintId> {
        let saved = match timeout(self.collaborator_timeout, self.repository.save(complaint)).await
        {
            Ok(Ok(id)) => {
                tracing::info!(
                    session_id = %session_id,
                    complaint_id = %id,
                    issue_type = %complaint.issue_type(),
                    "Complaint saved"
                );
                Some(id)
            }
            Ok(Err(e)) => {
                tracing::warn!(session_id = %session_id, error = %e, "Failed to save complaint");
                None
            }
            Err(_) => {
                tracing::warn!(
                    session_id = %session_id,
                    timeout_ms = self.collaborator_timeout.as_millis() as u64,
                    "Timed out saving complaint"
                );
                None
            }
        };

        let event = ComplaintSubmitted::from_record(complaint, saved);
        match timeout(self.collaborator_timeout, self.notifier.notify(&event)).await {
            Ok(Ok(())) => {
                tracing::debug!(session_id = %session_id, "Complaint notification sent")
            }
            Ok(Err(e)) => {
                tracing::warn!(session_id = %session_id, error = %e, "Failed to send complaint notification")
            }
            Err(_) => tracing::warn!(
                session_id = %session_id,
                timeout_ms = self.collaborator_timeout.as_millis() as u64,
                "Timed out sending complaint notification"
            ),
        }

        saved
    }
}
