//! Dialogue behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::conversation::DialogueConfig;

/// Optional dialogue steps and collaborator timing.
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueSettings {
    #[serde(default)]
    pub collect_contact: bool,

    #[serde(default)]
    pub ask_priority: bool,

    #[serde(default)]
    pub screen_descriptions: bool,

    /// Per-call timeout for the repository and notifier, in seconds
    #[serde(default = "default_collaborator_timeout")]
    pub collaborator_timeout_secs: u64,
}

impl DialogueSettings {
    /// The engine flags.
    pub fn engine_config(&self) -> DialogueConfig {
        DialogueConfig {
            collect_contact: self.collect_contact,
            ask_priority: self.ask_priority,
            screen_descriptions: self.screen_descriptions,
        }
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.collaborator_timeout_secs == 0 || self.collaborator_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout(
                "dialogue.collaborator_timeout_secs",
            ));
        }
        Ok(())
    }
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            collect_contact: false,
            ask_priority: false,
            screen_descriptions: false,
            collaborator_timeout_secs: default_collaborator_timeout(),
        }
    }
}

fn default_collaborator_timeout() -> u64 {
    10
}
