//! # LastValue – the most recent email an observer has seen
//!
//! Observers are shared as `Arc<dyn ...>` and updated through `&self`, so the
//! value lives behind an `RwLock`.
//!
//! ## State
//! ```text
//!   absent ──store(v)──► Some(v) ──store(w)──► Some(w) ...
//! ```

use std::sync::{PoisonError, RwLock};

/// Interior-mutable `Option<String>` slot, starts absent.
#[derive(Debug, Default)]
pub struct LastValue {
    inner: RwLock<Option<String>>,
}

impl LastValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored value.
    pub fn store(&self, value: String) {
        let mut g = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *g = Some(value);
    }

    /// Returns a copy of the stored value, `None` if nothing was stored yet.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        assert_eq!(LastValue::new().get(), None);
    }

    #[test]
    fn test_store_overwrites() {
        let v = LastValue::new();
        v.store("first".to_string());
        v.store("second".to_string());
        assert_eq!(v.get().as_deref(), Some("second"));
    }
}
