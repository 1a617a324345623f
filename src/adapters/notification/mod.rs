//! Notification Adapters
//!
//! Implementations of the ComplaintNotifier port.
//!
//! - **WebhookNotifier** - JSON POST to a configured URL, optionally signed
//! - **LoggingNotifier** - Logs the event; used when no webhook is set

mod logging_notifier;
mod webhook_notifier;

pub use logging_notifier::LoggingNotifier;
pub use webhook_notifier::{sign_payload, WebhookNotifier, WebhookNotifierConfig, SIGNATURE_HEADER};
