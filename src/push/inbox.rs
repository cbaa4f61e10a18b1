//! Push-variant subject: an inbox with unread and read queues.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::InboxConfig;
use crate::observers::{dispatch, ObserverSet, Subject};

/// Observer of the push protocol: receives the email itself.
pub trait Observer: Send + Sync {
    /// Called once per delivered email.
    fn update(&self, email: &str);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Subject of the push protocol.
pub trait EmailHolder: Subject<dyn Observer> + Send + Sync {
    /// Queues `email` as unread and delivers it to every observer.
    fn receive_email(&self, email: String);
}

struct State {
    unread: Vec<String>,
    read: VecDeque<String>,
    observers: ObserverSet<dyn Observer>,
    /// Ticket handed to the next delivery cycle.
    next_cycle: u64,
    /// Ticket whose batch is appended to `read` next.
    next_commit: u64,
    /// Delivered batches waiting for an older cycle to finish.
    delivered: BTreeMap<u64, Vec<String>>,
}

impl State {
    /// Takes the unread batch and reserves its place in the read log.
    fn begin_cycle(&mut self) -> Cycle {
        let ticket = self.next_cycle;
        self.next_cycle += 1;
        Cycle {
            ticket,
            batch: std::mem::take(&mut self.unread),
            observers: self.observers.snapshot(),
        }
    }

    /// Appends every delivered batch whose predecessors are already in `read`.
    fn commit(&mut self, ticket: u64, batch: Vec<String>, limit: Option<usize>) {
        self.delivered.insert(ticket, batch);
        while let Some(batch) = self.delivered.remove(&self.next_commit) {
            self.read.extend(batch);
            self.next_commit += 1;
        }
        if let Some(limit) = limit {
            while self.read.len() > limit {
                self.read.pop_front();
            }
        }
    }
}

/// One delivery cycle: the drained batch and the observers it goes to.
struct Cycle {
    ticket: u64,
    batch: Vec<String>,
    observers: Vec<Arc<dyn Observer>>,
}

/// Inbox that pushes every incoming email to its observers.
///
/// ## Invariants
/// - An email is moved from unread to read in the same cycle that delivers it.
/// - `unread` is empty whenever no delivery cycle is in progress.
/// - The read log keeps arrival order, even when an email arrives while an
///   earlier one is still being delivered.
/// - With [`InboxConfig::read_limit`] set, only the newest emails stay in the
///   read log.
pub struct EmailInbox {
    state: Mutex<State>,
    config: InboxConfig,
}

impl EmailInbox {
    /// Creates an empty inbox with [`InboxConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InboxConfig::default())
    }

    /// Creates an empty inbox with explicit settings.
    #[must_use]
    pub fn with_config(config: InboxConfig) -> Self {
        Self {
            state: Mutex::new(State {
                unread: Vec::new(),
                read: VecDeque::new(),
                observers: ObserverSet::new(),
                next_cycle: 0,
                next_commit: 0,
                delivered: BTreeMap::new(),
            }),
            config,
        }
    }

    /// Settings this inbox was built with.
    pub fn config(&self) -> &InboxConfig {
        &self.config
    }

    /// Delivered emails, oldest first.
    #[must_use]
    pub fn read_emails(&self) -> Vec<String> {
        self.state().read.iter().cloned().collect()
    }

    /// Emails waiting for delivery (empty outside a delivery cycle).
    #[must_use]
    pub fn unread_emails(&self) -> Vec<String> {
        self.state().unread.clone()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state().observers.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delivers the cycle's batch, in FIFO order, to every observer and moves
    /// it to the read log. Returns the number of failed observer calls.
    ///
    /// Observers run without the lock held. A batch is committed to `read`
    /// only after every older cycle committed, so a nested or concurrent
    /// `receive_email` cannot overtake the email being delivered.
    fn notify_observers(&self, cycle: Cycle) -> usize {
        let Cycle {
            ticket,
            batch,
            observers,
        } = cycle;

        let failed: usize = batch
            .iter()
            .map(|email| dispatch(&observers, |o| o.name(), |o| o.update(email)))
            .sum();

        self.state().commit(ticket, batch, self.config.read_limit());
        failed
    }
}

impl Default for EmailInbox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmailInbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("EmailInbox")
            .field("unread", &state.unread)
            .field("read", &state.read)
            .field("observers", &state.observers.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Subject<dyn Observer> for EmailInbox {
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

impl EmailHolder for EmailInbox {
    fn receive_email(&self, email: String) {
        let cycle = {
            let mut state = self.state();
            state.unread.push(email);
            state.begin_cycle()
        };

        let failed = self.notify_observers(cycle);
        tracing::debug!(failed, "email delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    /// Records every pushed email in order.
    #[derive(Default)]
    struct Recorder {
        seen: RwLock<Vec<String>>,
    }

    impl Recorder {
        fn seen(&self) -> Vec<String> {
            self.seen.read().unwrap().clone()
        }
    }

    impl Observer for Recorder {
        fn update(&self, email: &str) {
            self.seen.write().unwrap().push(email.to_string());
        }
    }

    /// Reads the inbox from inside its own update hook.
    struct Snooper {
        inbox: std::sync::Weak<EmailInbox>,
        unread_during_delivery: RwLock<Option<Vec<String>>>,
    }

    impl Observer for Snooper {
        fn update(&self, _email: &str) {
            if let Some(inbox) = self.inbox.upgrade() {
                *self.unread_during_delivery.write().unwrap() = Some(inbox.unread_emails());
            }
        }
    }

    struct Panicky;

    impl Observer for Panicky {
        fn update(&self, email: &str) {
            panic!("rejecting {email}");
        }
    }

    #[test]
    fn test_read_log_keeps_order() {
        let inbox = EmailInbox::new();
        for v in ["v1", "v2", "v3"] {
            inbox.receive_email(v.to_string());
        }
        assert_eq!(inbox.read_emails(), vec!["v1", "v2", "v3"]);
        assert!(inbox.unread_emails().is_empty());
    }

    #[test]
    fn test_observer_sees_every_email_in_order() {
        let inbox = EmailInbox::new();
        let recorder = Arc::new(Recorder::default());
        inbox.add_observer(recorder.clone());

        inbox.receive_email("a".to_string());
        inbox.receive_email("b".to_string());
        assert_eq!(recorder.seen(), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_registration_delivers_once() {
        let inbox = EmailInbox::new();
        let recorder = Arc::new(Recorder::default());
        inbox.add_observer(recorder.clone());
        inbox.add_observer(recorder.clone());

        inbox.receive_email("once".to_string());
        assert_eq!(inbox.observer_count(), 1);
        assert_eq!(recorder.seen(), vec!["once"]);
    }

    #[test]
    fn test_removed_observer_gets_nothing() {
        let inbox = EmailInbox::new();
        let recorder = Arc::new(Recorder::default());
        let handle: Arc<dyn Observer> = recorder.clone();

        inbox.add_observer(Arc::clone(&handle));
        inbox.remove_observer(&handle);
        inbox.remove_observer(&handle);
        inbox.receive_email("lost".to_string());

        assert!(recorder.seen().is_empty());
        assert_eq!(inbox.read_emails(), vec!["lost"]);
    }

    #[test]
    fn test_callback_into_inbox_does_not_deadlock() {
        let inbox = Arc::new(EmailInbox::new());
        let snooper = Arc::new(Snooper {
            inbox: Arc::downgrade(&inbox),
            unread_during_delivery: RwLock::new(None),
        });
        inbox.add_observer(snooper.clone());

        inbox.receive_email("x".to_string());
        assert_eq!(
            snooper.unread_during_delivery.read().unwrap().clone(),
            Some(Vec::new())
        );
    }

    /// Receives a follow-up email while the trigger email is being delivered.
    struct Forwarder {
        inbox: std::sync::Weak<EmailInbox>,
        trigger: &'static str,
        follow_up: &'static str,
        from_thread: bool,
    }

    impl Observer for Forwarder {
        fn update(&self, email: &str) {
            if email != self.trigger {
                return;
            }
            let Some(inbox) = self.inbox.upgrade() else {
                return;
            };
            let follow_up = self.follow_up.to_string();
            if self.from_thread {
                std::thread::spawn(move || inbox.receive_email(follow_up))
                    .join()
                    .unwrap();
            } else {
                inbox.receive_email(follow_up);
            }
        }
    }

    fn forwarding_inbox(from_thread: bool) -> (Arc<EmailInbox>, Arc<Recorder>) {
        let inbox = Arc::new(EmailInbox::new());
        let recorder = Arc::new(Recorder::default());
        inbox.add_observer(Arc::new(Forwarder {
            inbox: Arc::downgrade(&inbox),
            trigger: "v1",
            follow_up: "v2",
            from_thread,
        }));
        inbox.add_observer(recorder.clone());
        (inbox, recorder)
    }

    #[test]
    fn test_nested_receive_keeps_read_order() {
        let (inbox, recorder) = forwarding_inbox(false);

        inbox.receive_email("v1".to_string());
        assert_eq!(inbox.read_emails(), vec!["v1", "v2"]);
        assert!(inbox.unread_emails().is_empty());

        let mut seen = recorder.seen();
        seen.sort_unstable();
        assert_eq!(seen, vec!["v1", "v2"]);
    }

    #[test]
    fn test_concurrent_receive_keeps_read_order() {
        let (inbox, _recorder) = forwarding_inbox(true);

        inbox.receive_email("v1".to_string());
        inbox.receive_email("v3".to_string());
        assert_eq!(inbox.read_emails(), vec!["v1", "v2", "v3"]);
        assert!(inbox.unread_emails().is_empty());
    }

    #[test]
    fn test_read_capacity_applies_after_reordering() {
        let inbox = Arc::new(EmailInbox::with_config(
            InboxConfig::default().with_read_capacity(1),
        ));
        inbox.add_observer(Arc::new(Forwarder {
            inbox: Arc::downgrade(&inbox),
            trigger: "v1",
            follow_up: "v2",
            from_thread: false,
        }));

        inbox.receive_email("v1".to_string());
        assert_eq!(inbox.read_emails(), vec!["v2"]);
    }

    #[test]
    fn test_read_capacity_evicts_oldest() {
        let inbox = EmailInbox::with_config(InboxConfig::default().with_read_capacity(2));
        for v in ["v1", "v2", "v3"] {
            inbox.receive_email(v.to_string());
        }
        assert_eq!(inbox.read_emails(), vec!["v2", "v3"]);
    }

    #[test]
    fn test_panicking_observer_does_not_block_delivery() {
        let inbox = EmailInbox::new();
        let recorder = Arc::new(Recorder::default());
        inbox.add_observer(Arc::new(Panicky));
        inbox.add_observer(recorder.clone());

        inbox.receive_email("survives".to_string());
        assert_eq!(recorder.seen(), vec!["survives"]);
        assert_eq!(inbox.read_emails(), vec!["survives"]);
        assert!(inbox.unread_emails().is_empty());
    }
}
