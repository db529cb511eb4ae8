//! In-memory access token storage.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Holds the current bearer token in process memory only.
///
/// Cloning returns a handle to the same slot, so the request pipeline and
/// its callers observe a single token. Writes are last-write-wins with no
/// versioning; the server is the source of truth for validity. At process
/// start the slot is empty.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a valid Option; recover it so the
        // accessors keep their never-fails contract.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current token unconditionally.
    pub fn set(&self, token: impl Into<String>) {
        *self.slot() = Some(token.into());
        debug!("access token stored in memory");
    }

    /// The current token, if any.
    pub fn get(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Drop the current token. Idempotent.
    pub fn clear(&self) {
        *self.slot() = None;
        debug!("access token cleared from memory");
    }

    /// Cheap presence gate for identity-dependent calls.
    pub fn has(&self) -> bool {
        self.slot().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_token() {
        let store = TokenStore::new();
        store.set("T1");
        assert_eq!(store.get(), Some("T1".to_string()));
    }

    #[test]
    fn test_clear_empties_store() {
        let store = TokenStore::new();
        store.set("T1");
        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.has());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = TokenStore::new();
        store.clear();
        store.clear();
        assert!(!store.has());
    }

    #[test]
    fn test_has_is_false_before_any_set() {
        assert!(!TokenStore::new().has());
    }

    #[test]
    fn test_set_replaces_unconditionally() {
        let store = TokenStore::new();
        store.set("T1");
        store.set("T2");
        assert_eq!(store.get(), Some("T2".to_string()));
    }

    #[test]
    fn test_clones_share_the_same_slot() {
        let store = TokenStore::new();
        let handle = store.clone();
        store.set("T1");
        assert_eq!(handle.get(), Some("T1".to_string()));
        handle.clear();
        assert!(!store.has());
    }
}
