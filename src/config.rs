//! # Inbox configuration.
//!
//! Provides [`InboxConfig`], the settings of the push-variant
//! [`EmailInbox`](crate::push::EmailInbox).
//!
//! ## Sentinel values
//! - `read_capacity = 0` → unbounded read log (default)

/// Configuration for [`EmailInbox`](crate::push::EmailInbox).
///
/// ## Field semantics
/// - `read_capacity`: Maximum number of delivered emails kept in the read log
///   (`0` = keep everything). When the limit is reached the oldest entries are
///   evicted first.
///
/// ## Notes
/// All fields are public. Prefer [`InboxConfig::read_limit`] over checking the
/// `0` sentinel directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboxConfig {
    /// Maximum length of the read log.
    ///
    /// - `0` = unbounded
    /// - `n > 0` = at most `n` most recent emails are retained
    pub read_capacity: usize,
}

impl InboxConfig {
    /// Returns the read-log limit as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(n)` → at most `n` entries
    #[inline]
    pub fn read_limit(&self) -> Option<usize> {
        if self.read_capacity == 0 {
            None
        } else {
            Some(self.read_capacity)
        }
    }

    /// Sets the read-log capacity (`0` = unbounded).
    #[must_use]
    pub fn with_read_capacity(mut self, capacity: usize) -> Self {
        self.read_capacity = capacity;
        self
    }
}

impl Default for InboxConfig {
    /// Default configuration:
    ///
    /// - `read_capacity = 0` (keep the full read log)
    fn default() -> Self {
        Self { read_capacity: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let cfg = InboxConfig::default();
        assert_eq!(cfg.read_capacity, 0);
        assert_eq!(cfg.read_limit(), None);
    }

    #[test]
    fn test_read_limit_some() {
        let cfg = InboxConfig::default().with_read_capacity(3);
        assert_eq!(cfg.read_limit(), Some(3));
    }
}
