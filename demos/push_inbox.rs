//! # Example: push_inbox
//!
//! Demonstrates the push flavour of the observer protocol.
//!
//! Shows how to:
//! - Build an [`EmailInbox`] with a bounded read log.
//! - Receive emails that are handed to every observer directly.
//! - Attach the built-in [`LogWriter`].
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example push_inbox --features logging
//! ```

use std::sync::Arc;

use inbox_observer::push::{EmailHolder, EmailInbox, EmailNotifier, MessageSender, NotificationSender};
use inbox_observer::{InboxConfig, LogWriter, Subject};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let inbox = EmailInbox::with_config(InboxConfig::default().with_read_capacity(2));
    let phone = Arc::new(NotificationSender::new());
    let sms = Arc::new(MessageSender::new());
    let writer = Arc::new(LogWriter::new());

    inbox.add_observer(phone.clone());
    inbox.add_observer(sms.clone());
    inbox.add_observer(writer.clone());

    for email in ["*some testing email*", "*second*", "*third*"] {
        inbox.receive_email(email.to_string());
        println!("{}", phone.notify());
        println!("{}", sms.notify());
    }

    println!("read log (newest {}): {:?}", 2, inbox.read_emails());
    println!("logged deliveries: {}", writer.delivered());
}
