//! # Example: pull_inbox
//!
//! Demonstrates the pull flavour of the observer protocol.
//!
//! Shows how to:
//! - Build an [`EmailReceiver`] and attach senders to it.
//! - Let senders fetch the current email when they are notified.
//! - Detach a sender with [`Subject::remove_observer`].
//!
//! ## Flow
//! ```text
//! receive_email(v) ──► current = v ──► update() ──► sender pulls get_email()
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example pull_inbox
//! ```

use std::sync::Arc;

use inbox_observer::pull::{
    EmailReceiver, MessageSender, NotificationSender, Observer, SingleEmailReceiver,
};
use inbox_observer::Subject;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let receiver = Arc::new(EmailReceiver::new());
    let sms = Arc::new(MessageSender::new(&receiver));
    let phone = Arc::new(NotificationSender::new(&receiver));

    receiver.add_observer(sms.clone());
    let phone_handle: Arc<dyn Observer> = phone.clone();
    receiver.add_observer(Arc::clone(&phone_handle));

    receiver.receive_email("*super urgent email*".to_string());
    println!("[{}] {:?}", sms.channel(), sms.last_email());
    println!("[{}] {:?}", phone.channel(), phone.last_email());

    receiver.remove_observer(&phone_handle);
    receiver.receive_email("*follow-up*".to_string());
    println!("[{}] {:?}", sms.channel(), sms.last_email());
    println!("[{}] {:?} (detached)", phone.channel(), phone.last_email());
}
