//! # Push-variant observers
//!
//! Both senders store the pushed email and render it through
//! [`EmailNotifier::notify`]:
//!
//! ```text
//! sending email to phone, <email>   (NotificationSender)
//! sending email to sms, <email>     (MessageSender)
//! ```

use crate::observers::{Channel, LastValue};

use super::Observer;

/// Observer that can describe the email it would forward.
///
/// This capability is not needed by [`EmailInbox`](super::EmailInbox), which
/// only relies on [`Observer`].
pub trait EmailNotifier: Observer {
    /// Channel the email is forwarded to.
    fn channel(&self) -> Channel;

    /// Last pushed email, `None` until the first delivery.
    fn last_email(&self) -> Option<String>;

    /// Formats the notification for the last pushed email.
    ///
    /// Before the first delivery the email part is empty.
    fn notify(&self) -> String {
        format!(
            "sending email to {}, {}",
            self.channel(),
            self.last_email().unwrap_or_default()
        )
    }
}

/// Forwards emails as text messages.
#[derive(Debug, Default)]
pub struct MessageSender {
    email: LastValue,
}

impl MessageSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for MessageSender {
    fn update(&self, email: &str) {
        self.email.store(email.to_owned());
    }

    fn name(&self) -> &'static str {
        "MessageSender"
    }
}

impl EmailNotifier for MessageSender {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn last_email(&self) -> Option<String> {
        self.email.get()
    }
}

/// Forwards emails as phone notifications.
#[derive(Debug, Default)]
pub struct NotificationSender {
    email: LastValue,
}

impl NotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for NotificationSender {
    fn update(&self, email: &str) {
        self.email.store(email.to_owned());
    }

    fn name(&self) -> &'static str {
        "NotificationSender"
    }
}

impl EmailNotifier for NotificationSender {
    fn channel(&self) -> Channel {
        Channel::Phone
    }

    fn last_email(&self) -> Option<String> {
        self.email.get()
    }
}
