use super::*;

// =============================================================
// Lazy read-through
// =============================================================

#[test]
fn current_is_empty_before_first_get() {
    let session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, "abc"));
    assert_eq!(session.current(), None);
}

#[test]
fn get_reads_persisted_token() {
    let mut session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, "abc"));
    assert_eq!(session.get(), Some("abc"));
    assert_eq!(session.current(), Some("abc"));
}

#[test]
fn get_without_persisted_token_is_none() {
    let mut session = SessionStore::new(MemoryStore::default());
    assert_eq!(session.get(), None);
}

#[test]
fn empty_persisted_token_counts_as_absent() {
    let mut session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, ""));
    assert_eq!(session.get(), None);
}

// =============================================================
// Write-through
// =============================================================

#[test]
fn set_writes_memory_and_store() {
    let mut session = SessionStore::new(MemoryStore::default());
    session.set("tok");
    assert_eq!(session.current(), Some("tok"));
    assert_eq!(session.store().get(TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn set_replaces_previous_token() {
    let mut session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, "old"));
    session.set("new");
    assert_eq!(session.get(), Some("new"));
    assert_eq!(session.store().get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn clear_removes_memory_and_store() {
    let mut session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, "abc"));
    assert_eq!(session.get(), Some("abc"));
    session.clear();
    assert_eq!(session.current(), None);
    assert_eq!(session.get(), None);
    assert_eq!(session.store().get(TOKEN_KEY), None);
}

#[test]
fn clear_before_first_get_does_not_resurrect_stored_token() {
    let mut session = SessionStore::new(MemoryStore::with_entry(TOKEN_KEY, "abc"));
    session.clear();
    assert_eq!(session.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_without_browser_reads_nothing() {
    let mut store = BrowserStore;
    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY), None);
}
