//! # Push delivery: hand the email itself to every observer.
//!
//! [`EmailInbox`] queues incoming emails as **unread**, pushes each one to
//! every observer's [`Observer::update`] and then moves it to the **read**
//! log. Observers implementing [`EmailNotifier`] can render what they got.
//!
//! ## Protocol
//! ```text
//!   receive_email(v)
//!     ├─► unread.push(v)
//!     └─► notify_observers()
//!            ├─► for email in drain(unread) (FIFO):
//!            │      ├─► observer1.update(email)
//!            │      └─► observerN.update(email)
//!            └─► read.extend(drained)          (unread is empty again)
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use inbox_observer::Subject;
//! use inbox_observer::push::{EmailHolder, EmailInbox, EmailNotifier, MessageSender, NotificationSender};
//!
//! let inbox = EmailInbox::new();
//! let phone = Arc::new(NotificationSender::new());
//! let sms = Arc::new(MessageSender::new());
//!
//! inbox.add_observer(phone.clone());
//! inbox.add_observer(sms.clone());
//! inbox.receive_email("*some testing email*".to_string());
//!
//! assert_eq!(phone.notify(), "sending email to phone, *some testing email*");
//! assert_eq!(sms.notify(), "sending email to sms, *some testing email*");
//! assert_eq!(inbox.read_emails(), vec!["*some testing email*".to_string()]);
//! ```

mod inbox;
mod senders;

pub use inbox::{EmailHolder, EmailInbox, Observer};
pub use senders::{EmailNotifier, MessageSender, NotificationSender};
