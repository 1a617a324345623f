//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CIVIC_ASSISTANT`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use civic_complaint_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod dialogue;
mod error;
mod notification;
mod server;

pub use database::DatabaseConfig;
pub use dialogue::DialogueSettings;
pub use error::{ConfigError, ValidationError};
pub use notification::NotificationConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup (in-memory storage, logging notifier).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL persistence (optional)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Complaint notification webhook (optional)
    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub dialogue: DialogueSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the
    /// `CIVIC_ASSISTANT` prefix:
    ///
    /// - `CIVIC_ASSISTANT__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `CIVIC_ASSISTANT__DATABASE__URL=...` -> `database.url = ...`
    /// - `CIVIC_ASSISTANT__DIALOGUE__COLLECT_CONTACT=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CIVIC_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.notification.validate()?;
        self.dialogue.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
