//! Bearer-token session backed by durable key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns exactly one `SessionStore`. The in-memory mirror is the
//! source of truth for the page lifetime; every change is written through to
//! the backing store so the session survives reloads.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; SSR builds read
//! nothing and write nothing to keep server rendering deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Minimal persistent key-value surface the session needs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// `window.localStorage` adapter. Holds no handle so it stays `Send + Sync`
/// and can live inside reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store used by tests and side-by-side sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Current authentication token with lazy read-through and write-through.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
    /// `None` until the first `get`; afterwards the in-memory mirror.
    token: Option<Option<String>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store, token: None }
    }

    /// Current token, reading the backing store on first access.
    pub fn get(&mut self) -> Option<&str> {
        if self.token.is_none() {
            self.token = Some(self.store.get(TOKEN_KEY).filter(|t| !t.is_empty()));
        }
        self.current()
    }

    /// In-memory token only; `None` before the first `get`.
    pub fn current(&self) -> Option<&str> {
        self.token.as_ref().and_then(Option::as_deref)
    }

    pub fn set(&mut self, token: &str) {
        self.store.set(TOKEN_KEY, token);
        self.token = Some(Some(token.to_owned()));
    }

    pub fn clear(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.token = Some(None);
    }

    /// Backing store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }
}
