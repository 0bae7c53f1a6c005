//! Outgoing notifications.

mod email;

pub use email::{EmailMessage, EmailNotifier, Notifier};

#[cfg(any(test, feature = "test-utils"))]
pub use email::MockNotifier;
