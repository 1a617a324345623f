//! Session Store Port - Keeps one conversation state per session id.
//!
//! The store owns every session's state. Callers read it, run one turn and
//! write it back while holding the session's lock, so two turns for the
//! same session never interleave.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::SessionId;

/// Exclusive access to one session for the duration of a turn.
///
/// Dropping the guard releases the session.
pub type SessionLock = OwnedMutexGuard<()>;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for per-session conversation state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the state for a session, creating and storing a fresh one on
    /// first use.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn get(&self, session_id: &SessionId) -> Result<ConversationState, SessionStoreError>;

    /// Overwrites the state for a session.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn put(
        &self,
        session_id: &SessionId,
        state: ConversationState,
    ) -> Result<(), SessionStoreError>;

    /// Discards the session and stores a fresh state in its place.
    ///
    /// # Returns
    /// The fresh state
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails
    async fn reset(&self, session_id: &SessionId) -> Result<ConversationState, SessionStoreError>;

    /// Acquires the session's lock, waiting for any turn in progress.
    async fn lock(&self, session_id: &SessionId) -> SessionLock;

    /// Number of sessions currently held.
    async fn session_count(&self) -> usize;
}
