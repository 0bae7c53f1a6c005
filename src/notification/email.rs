//! Email notifications.
//!
//! There is no mail transport: messages are written to the log.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::Config;

/// Outgoing email collaborator.
///
/// Fire-and-forget: callers never see a result or a failure.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Notifier: Send + Sync {
    /// Send `message` to `address`
    fn send_email(&self, address: &str, message: &str);
}

/// A single outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient email address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Email subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Notifier that logs emails instead of delivering them
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    from: String,
    subject: String,
}

impl EmailNotifier {
    /// Create a notifier sending from `from` with a fixed subject line
    pub fn new(from: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
        }
    }

    /// Notifier using the configured sender address
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.notification_from.clone(),
            crate::config::WELCOME_EMAIL_SUBJECT,
        )
    }

    /// Build the message that would be delivered
    pub fn compose(&self, address: &str, message: &str) -> EmailMessage {
        EmailMessage {
            to: address.to_string(),
            from: self.from.clone(),
            subject: self.subject.clone(),
            body: message.to_string(),
        }
    }
}

impl Notifier for EmailNotifier {
    fn send_email(&self, address: &str, message: &str) {
        let email = self.compose(address, message);

        tracing::info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            "=== EMAIL (not sent) ===\n{}",
            email.body
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_fills_sender_and_subject() {
        let notifier = EmailNotifier::new("team@example.com", "Hello");
        let email = notifier.compose("jane@example.com", "Welcome aboard");

        assert_eq!(email.to, "jane@example.com");
        assert_eq!(email.from, "team@example.com");
        assert_eq!(email.subject, "Hello");
        assert_eq!(email.body, "Welcome aboard");
    }

    #[test]
    fn from_config_uses_configured_sender() {
        let mut config = Config::with_database_url("sqlite::memory:");
        config.notification_from = "ops@example.com".to_string();

        let email = EmailNotifier::from_config(&config).compose("a@example.com", "hi");
        assert_eq!(email.from, "ops@example.com");
    }

    #[test]
    fn send_email_does_not_panic_without_subscriber() {
        EmailNotifier::new("x@example.com", "s").send_email("y@example.com", "body");
    }
}
