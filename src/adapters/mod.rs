//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session state (in-memory)
//! - `persistence` - In-memory complaint repository
//! - `postgres` - PostgreSQL complaint repository
//! - `notification` - Webhook and logging notifiers
//! - `http` - The axum chat API

pub mod http;
pub mod notification;
pub mod persistence;
pub mod postgres;
pub mod storage;

pub use notification::{LoggingNotifier, WebhookNotifier, WebhookNotifierConfig};
pub use persistence::InMemoryComplaintRepository;
pub use postgres::PostgresComplaintRepository;
pub use storage::InMemorySessionStore;
