//! Notification webhook configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where to announce submitted complaints.
///
/// Without a webhook URL, events are only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    pub webhook_url: Option<String>,

    /// Webhook request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// HMAC-SHA256 key for signing webhook bodies
    pub signing_secret: Option<SecretString>,
}

impl NotificationConfig {
    /// The webhook URL, if a non-blank one is set.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.webhook_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout("notification.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout(),
            signing_secret: None,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_logging_only() {
        let config = NotificationConfig::default();
        assert!(config.webhook_url().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_url_counts_as_unset() {
        let config = NotificationConfig {
            webhook_url: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(config.webhook_url().is_none());
    }

    #[test]
    fn rejects_non_http_url() {
        let config = NotificationConfig {
            webhook_url: Some("ftp://hooks.example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = NotificationConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
