//! Pull-variant subject: a single-slot email receiver.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::observers::{dispatch, ObserverSet, Subject};

/// Observer of the pull protocol.
///
/// `update` carries no data: the observer is expected to query the subject it
/// was built from.
pub trait Observer: Send + Sync {
    /// Called after the subject's current email changed.
    fn update(&self);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Subject of the pull protocol that stores at most one email.
pub trait SingleEmailReceiver: Subject<dyn Observer> + Send + Sync {
    /// Replaces the current email and notifies every observer.
    fn receive_email(&self, email: String);

    /// Returns the current email, `None` before the first one arrives.
    fn get_email(&self) -> Option<String>;
}

struct State {
    current: Option<String>,
    observers: ObserverSet<dyn Observer>,
}

/// Inbox that remembers only the latest email.
///
/// All mutations of the slot and the observer set happen under one mutex;
/// observers are notified after it is released so they can call
/// [`SingleEmailReceiver::get_email`] from `update`.
pub struct EmailReceiver {
    state: Mutex<State>,
}

impl EmailReceiver {
    /// Creates an empty receiver with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                current: None,
                observers: ObserverSet::new(),
            }),
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state().observers.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Signals every observer that the current email changed.
    /// Returns the number of failed observer calls.
    fn notify_observers(&self) -> usize {
        let observers = self.state().observers.snapshot();
        dispatch(&observers, |o| o.name(), |o| o.update())
    }
}

impl Default for EmailReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmailReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("EmailReceiver")
            .field("current", &state.current)
            .field("observers", &state.observers.len())
            .finish()
    }
}

impl Subject<dyn Observer> for EmailReceiver {
    fn add_observer(&self, observer: Arc<dyn Observer>) {
        let name = observer.name();
        if self.state().observers.insert(observer) {
            tracing::debug!(observer = name, "observer registered");
        } else {
            tracing::debug!(observer = name, "observer already registered");
        }
    }

    fn remove_observer(&self, observer: &Arc<dyn Observer>) {
        if self.state().observers.remove(observer) {
            tracing::debug!(observer = observer.name(), "observer removed");
        }
    }
}

impl SingleEmailReceiver for EmailReceiver {
    fn receive_email(&self, email: String) {
        let observers = {
            let mut state = self.state();
            state.current = Some(email);
            state.observers.len()
        };
        tracing::debug!(observers, "email received, notifying");

        let failed = self.notify_observers();
        if failed > 0 {
            tracing::debug!(failed, "notification cycle finished with failures");
        }
    }

    fn get_email(&self) -> Option<String> {
        self.state().current.clone()
    }
}
