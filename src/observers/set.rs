//! # ObserverSet: reference-keyed observer registry
//!
//! [`ObserverSet`] stores `Arc` handles to observers and deduplicates them by
//! **allocation identity**, not by value: two distinct observers that compare
//! equal are both kept, while the same `Arc` registered twice is kept once.
//!
//! ## Rules
//! - `insert` of an already present handle is a no-op (returns `false`).
//! - `remove` of an absent handle is a no-op (returns `false`).
//! - Iteration order is unspecified.
//!
//! ## Diagram
//! ```text
//!   insert(Arc<O>) ──► key = Arc::as_ptr(..) ──► HashMap<ObserverKey, Arc<O>>
//!   snapshot()     ──► Vec<Arc<O>> (cloned handles, set unlocked afterwards)
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity of a registered observer (address of its allocation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverKey(usize);

impl ObserverKey {
    /// Key of the allocation behind `observer`.
    ///
    /// Clones of the same `Arc` share a key; the vtable of a trait object is
    /// ignored, only the data address counts.
    pub fn of<O: ?Sized>(observer: &Arc<O>) -> Self {
        Self(Arc::as_ptr(observer).cast::<()>() as usize)
    }
}

/// Set of observer handles keyed by reference identity.
pub struct ObserverSet<O: ?Sized> {
    entries: HashMap<ObserverKey, Arc<O>>,
}

impl<O: ?Sized> ObserverSet<O> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `observer`. Returns `false` if it was already registered.
    pub fn insert(&mut self, observer: Arc<O>) -> bool {
        let key = ObserverKey::of(&observer);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, observer);
        true
    }

    /// Unregisters `observer`. Returns `false` if it was not registered.
    pub fn remove(&mut self, observer: &Arc<O>) -> bool {
        self.entries.remove(&ObserverKey::of(observer)).is_some()
    }

    /// Whether `observer` is currently registered.
    #[must_use]
    pub fn contains(&self, observer: &Arc<O>) -> bool {
        self.entries.contains_key(&ObserverKey::of(observer))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cloned handles of every registered observer.
    ///
    /// Subjects notify from the snapshot so that observers may call back into
    /// the subject while being notified.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<O>> {
        self.entries.values().cloned().collect()
    }
}

impl<O: ?Sized> Default for ObserverSet<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ?Sized> fmt::Debug for ObserverSet<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.entries.len())
            .finish()
    }
}
