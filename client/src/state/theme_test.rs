use super::*;
use crate::util::storage::{PreferenceStore, StoreError};

use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory stand-in for `localStorage`.
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    fn empty() -> Self {
        Self { values: RefCell::new(HashMap::new()) }
    }

    fn holding(key: &str, value: &str) -> Self {
        let store = Self::empty();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    fn value_of(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

/// Store whose every access fails, like a browser with storage disabled.
struct UnreachableStore;

impl PreferenceStore for UnreachableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError)
    }
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_negates_the_current_value() {
    let store = ThemeStore::new(MemoryStore::empty());
    assert!(!store.toggle(true));
    assert!(store.toggle(false));
}

#[test]
fn toggle_persists_the_new_value() {
    let memory = MemoryStore::empty();
    let store = ThemeStore::new(memory);
    store.toggle(true);
    assert_eq!(store.store.value_of(STORAGE_KEY).as_deref(), Some("false"));
    store.toggle(false);
    assert_eq!(store.store.value_of(STORAGE_KEY).as_deref(), Some("true"));
}

#[test]
fn toggle_still_negates_when_the_write_fails() {
    let store = ThemeStore::new(UnreachableStore);
    assert!(!store.toggle(true));
    assert!(store.toggle(false));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_returns_default_when_store_is_empty() {
    let store = ThemeStore::new(MemoryStore::empty());
    assert!(store.initialize(true));
    assert!(!store.initialize(false));
}

#[test]
fn initialize_prefers_a_stored_value_over_the_default() {
    let store = ThemeStore::new(MemoryStore::holding(STORAGE_KEY, "false"));
    assert!(!store.initialize(true));

    let store = ThemeStore::new(MemoryStore::holding(STORAGE_KEY, "true"));
    assert!(store.initialize(false));
}

#[test]
fn initialize_treats_malformed_tokens_as_absent() {
    for raw in ["darkish", "1", "", "TRUE", "null"] {
        let store = ThemeStore::new(MemoryStore::holding(STORAGE_KEY, raw));
        assert!(store.initialize(true), "token {raw:?} should fall back");
        assert!(!store.initialize(false), "token {raw:?} should fall back");
    }
}

#[test]
fn initialize_does_not_write_to_the_store() {
    let store = ThemeStore::new(MemoryStore::empty());
    store.initialize(true);
    assert_eq!(store.store.value_of(STORAGE_KEY), None);
}

#[test]
fn initialize_returns_default_when_store_is_unreachable() {
    let store = ThemeStore::new(UnreachableStore);
    assert!(!store.initialize(false));
    assert!(store.initialize(true));
}

#[test]
fn initialize_is_idempotent_over_a_stored_value() {
    let store = ThemeStore::new(MemoryStore::holding(STORAGE_KEY, "false"));
    assert!(!store.initialize(true));
    assert!(!store.initialize(true));
    assert!(!store.initialize(false));
}

// =============================================================
// toggle + initialize round trip
// =============================================================

#[test]
fn a_new_session_sees_the_toggled_value() {
    let store = ThemeStore::new(MemoryStore::empty());
    let toggled = store.toggle(true);
    assert_eq!(store.initialize(true), toggled);
    assert_eq!(store.initialize(false), toggled);
}

// =============================================================
// defaults and tokens
// =============================================================

#[test]
fn preference_defaults_to_dark() {
    assert!(ThemePreference::default().is_dark);
    assert!(DEFAULT_DARK);
}

#[test]
fn mode_token_maps_both_states() {
    assert_eq!(mode_token(true), "dark");
    assert_eq!(mode_token(false), "light");
}
