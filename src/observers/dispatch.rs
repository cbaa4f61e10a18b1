//! # Panic-isolated delivery
//!
//! Runs one hook per observer and keeps going when a hook panics. Each panic
//! becomes an [`ObserverError::Panicked`] and is logged with `warn`.
//!
//! ```text
//!   dispatch(observers, call)
//!       ├──► catch_unwind(call(o1)) ─► ok
//!       ├──► catch_unwind(call(o2)) ─► panic ─► ObserverError::Panicked (warn)
//!       └──► catch_unwind(call(oN)) ─► ok
//! ```
//!
//! **Warning**: `AssertUnwindSafe` is used, an observer that panics while
//! holding its own lock may leave that state poisoned.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::ObserverError;

/// Invokes `call` on every observer, isolating panics.
///
/// `name` resolves the observer name used in the error report.
/// Returns how many hooks panicked (`0` when every hook returned).
pub(crate) fn dispatch<O, N, F>(observers: &[Arc<O>], name: N, mut call: F) -> usize
where
    O: ?Sized,
    N: Fn(&O) -> &'static str,
    F: FnMut(&O),
{
    let mut failed = 0;

    for observer in observers {
        let target: &O = observer;
        tracing::trace!(observer = name(target), "notifying observer");

        if let Err(err) = isolate(name(target), || call(target)) {
            tracing::warn!(
                label = err.as_label(),
                observer = err.observer(),
                "{}",
                err.as_message()
            );
            failed += 1;
        }
    }
    failed
}

/// Runs a single hook, converting a panic into [`ObserverError::Panicked`].
fn isolate<F: FnOnce()>(observer: &'static str, hook: F) -> Result<(), ObserverError> {
    panic::catch_unwind(AssertUnwindSafe(hook)).map_err(|payload| ObserverError::Panicked {
        observer,
        info: panic_message(payload.as_ref()),
    })
}

/// Renders a panic payload (`&str` / `String`) as text.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Hook {
        name: &'static str,
        explode: bool,
        calls: AtomicUsize,
    }

    impl Hook {
        fn arc(name: &'static str, explode: bool) -> Arc<Self> {
            Arc::new(Self {
                name,
                explode,
                calls: AtomicUsize::new(0),
            })
        }

        fn fire(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.explode {
                panic!("hook {} exploded", self.name);
            }
        }
    }

    #[test]
    fn test_all_observers_called() {
        let hooks = vec![Hook::arc("a", false), Hook::arc("b", false)];
        let failed = dispatch(&hooks, |h| h.name, |h| h.fire());

        assert_eq!(failed, 0);
        for h in &hooks {
            assert_eq!(h.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_panic_is_isolated() {
        let hooks = vec![
            Hook::arc("first", false),
            Hook::arc("broken", true),
            Hook::arc("last", false),
        ];
        let failed = dispatch(&hooks, |h| h.name, |h| h.fire());

        assert_eq!(failed, 1);
        assert_eq!(hooks[2].calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_isolate_reports_panic() {
        let broken = Hook::arc("broken", true);
        assert_eq!(
            isolate(broken.name, || broken.fire()),
            Err(ObserverError::Panicked {
                observer: "broken",
                info: "hook broken exploded".to_string(),
            })
        );
        assert_eq!(isolate("quiet", || {}), Ok(()));
    }

    #[test]
    fn test_panic_message_static_str() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
