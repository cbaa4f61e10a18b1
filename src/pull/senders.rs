//! # Pull-variant observers
//!
//! [`MessageSender`] and [`NotificationSender`] have the same shape: a weak
//! link to the receiver they were built from and the last email they pulled.
//! They differ only in their [`Channel`].
//!
//! ```text
//!   update()
//!     ├─ receiver alive   ──► get_email() ─► Some(v) ──► last = v
//!     └─ receiver dropped ──► ignored
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use crate::observers::{Channel, LastValue};

use super::{Observer, SingleEmailReceiver};

/// Weak link to a receiver plus the last pulled value.
struct PullLink {
    source: Weak<dyn SingleEmailReceiver>,
    email: LastValue,
}

impl PullLink {
    fn new<R>(receiver: &Arc<R>) -> Self
    where
        R: SingleEmailReceiver + 'static,
    {
        let source = Arc::downgrade(receiver);
        let source: Weak<dyn SingleEmailReceiver> = source;
        Self {
            source,
            email: LastValue::new(),
        }
    }

    fn pull(&self, channel: Channel) {
        let Some(receiver) = self.source.upgrade() else {
            tracing::debug!(%channel, "receiver dropped, nothing to pull");
            return;
        };
        if let Some(email) = receiver.get_email() {
            tracing::trace!(%channel, "pulled current email");
            self.email.store(email);
        }
    }
}

/// Forwards emails as text messages.
pub struct MessageSender {
    link: PullLink,
}

impl MessageSender {
    /// Creates a sender that pulls from `receiver` when notified.
    ///
    /// The sender still has to be registered with
    /// [`Subject::add_observer`](crate::Subject::add_observer).
    #[must_use]
    pub fn new<R>(receiver: &Arc<R>) -> Self
    where
        R: SingleEmailReceiver + 'static,
    {
        Self {
            link: PullLink::new(receiver),
        }
    }

    /// Last email pulled, `None` until the first notification.
    #[must_use]
    pub fn last_email(&self) -> Option<String> {
        self.link.email.get()
    }

    /// Always [`Channel::Sms`].
    pub fn channel(&self) -> Channel {
        Channel::Sms
    }
}

impl Observer for MessageSender {
    fn update(&self) {
        self.link.pull(self.channel());
    }

    fn name(&self) -> &'static str {
        "MessageSender"
    }
}

impl fmt::Debug for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSender")
            .field("email", &self.last_email())
            .finish()
    }
}

/// Forwards emails as phone notifications.
pub struct NotificationSender {
    link: PullLink,
}

impl NotificationSender {
    /// Creates a sender that pulls from `receiver` when notified.
    #[must_use]
    pub fn new<R>(receiver: &Arc<R>) -> Self
    where
        R: SingleEmailReceiver + 'static,
    {
        Self {
            link: PullLink::new(receiver),
        }
    }

    /// Last email pulled, `None` until the first notification.
    #[must_use]
    pub fn last_email(&self) -> Option<String> {
        self.link.email.get()
    }

    /// Always [`Channel::Phone`].
    pub fn channel(&self) -> Channel {
        Channel::Phone
    }
}

impl Observer for NotificationSender {
    fn update(&self) {
        self.link.pull(self.channel());
    }

    fn name(&self) -> &'static str {
        "NotificationSender"
    }
}

impl fmt::Debug for NotificationSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSender")
            .field("email", &self.last_email())
            .finish()
    }
}
