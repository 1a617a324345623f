//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! - **InMemorySessionStore** - Keeps session state in process memory

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
