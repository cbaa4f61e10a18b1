//! # LogWriter — push observer that logs deliveries
//!
//! Emits one `info` record per delivered email. Install a `tracing`
//! subscriber (e.g. `tracing_subscriber::fmt`) to see the output.
//!
//! ## Example output
//! ```text
//! INFO inbox_observer::embedded::log: email delivered seq=1 len=20 email="*some testing email*"
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::push::Observer;

/// Logging observer for [`EmailInbox`](crate::push::EmailInbox).
#[derive(Debug, Default)]
pub struct LogWriter {
    delivered: AtomicU64,
}

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emails logged so far.
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }
}

impl Observer for LogWriter {
    fn update(&self, email: &str) {
        let seq = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(seq, len = email.len(), email, "email delivered");
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::push::{EmailHolder, EmailInbox};
    use crate::Subject;
    use std::sync::Arc;

    #[test]
    fn test_counts_deliveries() {
        let inbox = EmailInbox::new();
        let writer = Arc::new(LogWriter::new());
        inbox.add_observer(writer.clone());

        inbox.receive_email("a".to_string());
        inbox.receive_email("b".to_string());
        assert_eq!(writer.delivered(), 2);
    }
}
