//! # inbox-observer
//!
//! **inbox-observer** implements the two classic flavours of the observer
//! pattern over a small email inbox.
//!
//! - **Pull**: the subject only signals that something changed; each observer
//!   fetches the new value itself.
//! - **Push**: the subject hands the new value to every observer directly.
//!
//! Both variants share the registration half of the protocol ([`Subject`])
//! and keep their own delivery contract.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   pull::EmailReceiver (one email slot)      push::EmailInbox (unread / read)
//!   ┌────────────────────────────────┐        ┌────────────────────────────────┐
//!   │ current: Option<String>        │        │ unread: Vec<String>            │
//!   │ observers: ObserverSet<dyn ..> │        │ read:   VecDeque<String>       │
//!   └───────┬────────────────────────┘        │ observers: ObserverSet<dyn ..> │
//!           │ update()                        └───────┬────────────────────────┘
//!           ▼                                         │ update(&email)
//!   MessageSender / NotificationSender                ▼
//!           │ get_email()                     MessageSender / NotificationSender
//!           └──────────► back to receiver             │ notify()
//!                                                     ▼
//!                                  "sending email to <channel>, <email>"
//! ```
//!
//! ### Delivery
//! ```text
//! receive_email(v)
//!   ├─► update subject state (under the subject's mutex)
//!   ├─► snapshot observers, release the mutex
//!   └─► dispatch to each observer
//!         ├─ returns ──► next observer
//!         └─ panics  ──► ObserverError::Panicked (warn), next observer
//! ```
//!
//! ## Features
//! | Area              | Description                                             | Key types / traits                          |
//! |-------------------|---------------------------------------------------------|---------------------------------------------|
//! | **Registration**  | Identity-keyed observer sets, idempotent add/remove.    | [`Subject`], [`ObserverSet`]                |
//! | **Pull delivery** | Event-only notification, observers query the receiver.  | [`pull::EmailReceiver`], [`pull::Observer`] |
//! | **Push delivery** | Payload delivery with unread/read bookkeeping.          | [`push::EmailInbox`], [`push::EmailNotifier`] |
//! | **Errors**        | Isolated observer failures.                             | [`ObserverError`]                           |
//! | **Configuration** | Read-log retention of the push inbox.                   | [`InboxConfig`]                             |
//!
//! ## Optional features
//! - `logging`: exports a built-in [`LogWriter`] push observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use inbox_observer::{push, pull, Subject};
//! use inbox_observer::push::{EmailHolder, EmailNotifier};
//! use inbox_observer::pull::SingleEmailReceiver;
//!
//! // Pull: observers fetch the email themselves.
//! let receiver = Arc::new(pull::EmailReceiver::new());
//! let sms = Arc::new(pull::MessageSender::new(&receiver));
//! receiver.add_observer(sms.clone());
//! receiver.receive_email("*super urgent email*".to_string());
//! assert_eq!(sms.last_email().as_deref(), Some("*super urgent email*"));
//!
//! // Push: the inbox hands the email over.
//! let inbox = push::EmailInbox::new();
//! let phone = Arc::new(push::NotificationSender::new());
//! inbox.add_observer(phone.clone());
//! inbox.receive_email("*some testing email*".to_string());
//! assert_eq!(phone.notify(), "sending email to phone, *some testing email*");
//! ```
mod config;
mod error;
mod observers;

pub mod pull;
pub mod push;

// ---- Public re-exports ----

pub use config::InboxConfig;
pub use error::ObserverError;
pub use observers::{Channel, LastValue, ObserverKey, ObserverSet, Subject};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod embedded;
#[cfg(feature = "logging")]
pub use embedded::LogWriter;
