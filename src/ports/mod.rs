//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Per-session conversation state with turn locking
//! - `ComplaintRepository` - Durable storage for accepted complaints
//! - `ComplaintNotifier` - Best-effort announcement of accepted complaints

mod complaint_notifier;
mod complaint_repository;
mod session_store;

pub use complaint_notifier::{ComplaintNotifier, NotificationError};
pub use complaint_repository::{ComplaintRepository, PersistenceError};
pub use session_store::{SessionLock, SessionStore, SessionStoreError};
