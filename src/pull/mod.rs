//! # Pull delivery: notify the event, let observers fetch the data.
//!
//! [`EmailReceiver`] keeps **one** current email. Receiving a new one
//! overwrites it and then calls every observer's [`Observer::update`] with no
//! arguments; each observer pulls the value back through
//! [`SingleEmailReceiver::get_email`].
//!
//! ## Protocol
//! ```text
//!   receive_email(v)
//!     ├─► current = Some(v)                 (last write wins, no queue)
//!     └─► notify_observers()
//!            ├─► MessageSender.update()      ──► receiver.get_email() ─► Some(v)
//!            └─► NotificationSender.update() ──► receiver.get_email() ─► Some(v)
//! ```
//!
//! Observers hold a `Weak` reference to the receiver, the receiver holds the
//! observers by `Arc`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use inbox_observer::Subject;
//! use inbox_observer::pull::{EmailReceiver, MessageSender, NotificationSender, Observer, SingleEmailReceiver};
//!
//! let receiver = Arc::new(EmailReceiver::new());
//! let sms = Arc::new(MessageSender::new(&receiver));
//! let phone = Arc::new(NotificationSender::new(&receiver));
//!
//! receiver.add_observer(sms.clone() as Arc<dyn Observer>);
//! receiver.add_observer(phone.clone() as Arc<dyn Observer>);
//! receiver.receive_email("*super urgent email*".to_string());
//!
//! assert_eq!(sms.last_email().as_deref(), Some("*super urgent email*"));
//! assert_eq!(phone.last_email().as_deref(), Some("*super urgent email*"));
//! ```

mod receiver;
mod senders;

pub use receiver::{EmailReceiver, Observer, SingleEmailReceiver};
pub use senders::{MessageSender, NotificationSender};
