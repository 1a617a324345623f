//! In-Memory Session Store Adapter
//!
//! Keeps every session's conversation state in process memory. Sessions
//! live until they are reset or the process exits; there is no eviction.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionLock, SessionStore, SessionStoreError};

/// In-memory storage for conversation state.
///
/// Clones share the same underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<HashMap<SessionId, ConversationState>>>,
    locks: Arc<RwLock<HashMap<SessionId, Arc<Mutex<()>>>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored sessions and their locks (useful for tests).
    ///
    /// Guards already handed out stay valid but no longer exclude new turns.
    pub async fn clear(&self) {
        self.states.write().await.clear();
        self.locks.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &SessionId) -> Result<ConversationState, SessionStoreError> {
        if let Some(state) = self.states.read().await.get(session_id) {
            return Ok(state.clone());
        }

        let mut states = self.states.write().await;
        let state = states
            .entry(session_id.clone())
            .or_insert_with(|| ConversationState::new(session_id.clone()));
        Ok(state.clone())
    }

    async fn put(
        &self,
        session_id: &SessionId,
        state: ConversationState,
    ) -> Result<(), SessionStoreError> {
        self.states.write().await.insert(session_id.clone(), state);
        Ok(())
    }

    async fn reset(&self, session_id: &SessionId) -> Result<ConversationState, SessionStoreError> {
        let fresh = ConversationState::new(session_id.clone());
        self.states
            .write()
            .await
            .insert(session_id.clone(), fresh.clone());
        Ok(fresh)
    }

    async fn lock(&self, session_id: &SessionId) -> SessionLock {
        let lock = {
            let mut locks = self.locks.write().await;
            Arc::clone(locks.entry(session_id.clone()).or_default())
        };
        lock.lock_owned().await
    }

    async fn session_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::IssueType;
    use std::time::Duration;

    fn session(id: &str) -> SessionId {
        SessionId::new(id).unwrap()
    }

    #[tokio::test]
    async fn get_creates_fresh_state_on_first_use() {
        let store = InMemorySessionStore::new();

        let state = store.get(&session("a")).await.unwrap();

        assert_eq!(state.session_id, session("a"));
        assert!(state.messages.is_empty());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn put_then_get_returns_saved_state() {
        let store = InMemorySessionStore::new();
        let mut state = store.get(&session("a")).await.unwrap();
        state.issue_type = Some(IssueType::Road);

        store.put(&session("a"), state.clone()).await.unwrap();

        assert_eq!(store.get(&session("a")).await.unwrap(), state);
    }

    #[tokio::test]
    async fn reset_replaces_state_with_fresh_one() {
        let store = InMemorySessionStore::new();
        let mut state = store.get(&session("a")).await.unwrap();
        state.issue_type = Some(IssueType::Water);
        store.put(&session("a"), state).await.unwrap();

        let fresh = store.reset(&session("a")).await.unwrap();

        assert_eq!(fresh.issue_type, None);
        assert_eq!(store.get(&session("a")).await.unwrap().issue_type, None);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = InMemorySessionStore::new();
        let mut a = store.get(&session("a")).await.unwrap();
        a.issue_type = Some(IssueType::Garbage);
        store.put(&session("a"), a).await.unwrap();

        let b = store.get(&session("b")).await.unwrap();

        assert_eq!(b.issue_type, None);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        clone.get(&session("shared")).await.unwrap();

        assert_eq!(store.session_count().await, 1);
        store.clear().await;
        assert_eq!(clone.session_count().await, 0);
    }

    #[tokio::test]
    async fn clear_drops_states_and_locks() {
        let store = InMemorySessionStore::new();
        store.get(&session("a")).await.unwrap();
        drop(store.lock(&session("a")).await);

        store.clear().await;

        assert_eq!(store.session_count().await, 0);
        assert!(store.locks.read().await.is_empty());
    }

    #[tokio::test]
    async fn lock_is_exclusive_per_session() {
        let store = InMemorySessionStore::new();
        let guard = store.lock(&session("a")).await;

        let contender = store.clone();
        let blocked = tokio::time::timeout(
            Duration::from_millis(50),
            contender.lock(&session("a")),
        )
        .await;
        assert!(blocked.is_err(), "second lock should wait");

        let other = tokio::time::timeout(Duration::from_millis(50), store.lock(&session("b"))).await;
        assert!(other.is_ok(), "other sessions are not blocked");

        drop(guard);
        let acquired =
            tokio::time::timeout(Duration::from_millis(50), store.lock(&session("a"))).await;
        assert!(acquired.is_ok());
    }
}
