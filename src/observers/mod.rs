//! # Observer plumbing shared by both inbox variants.
//!
//! ## Architecture
//! ```text
//!   Subject::add_observer(Arc<O>) ──► ObserverSet<O> (keyed by Arc identity)
//!                                          │
//!   receive_email(..) ──► snapshot() ──► dispatch(..)
//!                                          ├──► observer1 hook
//!                                          ├──► observer2 hook (panic → ObserverError)
//!                                          └──► observerN hook
//! ```
//!
//! The delivery contract itself (pull vs push) lives in [`crate::pull`] and
//! [`crate::push`].

mod channel;
mod dispatch;
mod set;
mod subject;
mod value;

pub use channel::Channel;
pub(crate) use dispatch::dispatch;
pub use set::{ObserverKey, ObserverSet};
pub use subject::Subject;
pub use value::LastValue;
