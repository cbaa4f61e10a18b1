//! # Subject: the registration half of the observer protocol
//!
//! Both inbox variants implement [`Subject`] over their own observer trait.
//! How a change reaches the observers (event only, or event plus payload) is
//! left to each variant; this trait only covers membership.

use std::sync::Arc;

/// Data holder that tracks a set of observers.
///
/// `O` is the observer capability of the variant (`dyn pull::Observer` or
/// `dyn push::Observer`).
///
/// ## Contract
/// - `add_observer` is idempotent per `Arc` allocation.
/// - `remove_observer` of an unknown observer is a no-op.
pub trait Subject<O: ?Sized> {
    /// Registers `observer` for future notifications.
    fn add_observer(&self, observer: Arc<O>);

    /// Detaches `observer`; it receives no further notifications.
    fn remove_observer(&self, observer: &Arc<O>);
}
