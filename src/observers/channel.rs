//! Delivery channels named in observer output.

use std::fmt;

/// Channel an observer forwards emails to.
///
/// Fixed per observer type: `NotificationSender` → [`Channel::Phone`],
/// `MessageSender` → [`Channel::Sms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Push notification on a phone.
    Phone,
    /// Text message.
    Sms,
}

impl Channel {
    /// Returns the label embedded in notification text.
    pub fn as_label(&self) -> &'static str {
        match self {
            Channel::Phone => "phone",
            Channel::Sms => "sms",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
