//! ResetSessionHandler - Starts a session over with an empty form.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to discard a session's conversation.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Handler for session resets.
pub struct ResetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ResetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Waits for any turn in progress, then replaces the state.
    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<(), SessionStoreError> {
        let _guard = self.sessions.lock(&cmd.session_id).await;
        self.sessions.reset(&cmd.session_id).await?;
        tracing::info!(session_id = %cmd.session_id, "Session reset");
        Ok(())
    }
}
