//! Error types reported during observer delivery.
//!
//! None of the subject operations fail: registering twice, removing an absent
//! observer and reading an empty inbox are all well-defined. The only failure
//! the crate describes is an observer that panics while being notified; the
//! subject isolates it and reports it as an [`ObserverError`].
//!
//! [`ObserverError`] provides helper methods (`as_label`, `as_message`) for logs.

use thiserror::Error;

/// # Errors produced while notifying observers.
///
/// A failure is local to one observer in one notification cycle. Delivery to
/// the remaining observers continues.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// Observer panicked inside its update hook.
    #[error("observer {observer} panicked: {info}")]
    Panicked {
        /// Name reported by the observer.
        observer: &'static str,
        /// Panic payload rendered as text.
        info: String,
    },
}

impl ObserverError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use inbox_observer::ObserverError;
    ///
    /// let err = ObserverError::Panicked { observer: "sms", info: "boom".into() };
    /// assert_eq!(err.as_label(), "observer_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::Panicked { .. } => "observer_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ObserverError::Panicked { observer, info } => {
                format!("panic in observer={observer}: {info}")
            }
        }
    }

    /// Name of the observer the error belongs to.
    pub fn observer(&self) -> &'static str {
        match self {
            ObserverError::Panicked { observer, .. } => *observer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panicked_display() {
        let err = ObserverError::Panicked {
            observer: "MessageSender",
            info: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "observer MessageSender panicked: boom");
        assert_eq!(err.as_message(), "panic in observer=MessageSender: boom");
        assert_eq!(err.observer(), "MessageSender");
    }
}
