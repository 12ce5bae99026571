//! Persistent key-value store capability.
//!
//! DESIGN
//! ======
//! The browser may or may not expose `localStorage` (SSR never does), so
//! callers depend on the [`PreferenceStore`] trait instead of probing for
//! the store at every call site. [`BrowserStore`] is the real
//! implementation; [`NoopStore`] serves environments with no persistence.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use thiserror::Error;

/// Write failure from a preference store.
///
/// Callers treat this as best-effort: a failed write means the value will
/// not survive the session, nothing more.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("preference store rejected the write")]
pub struct StoreError;

/// Per-browser, per-origin textual key-value store.
pub trait PreferenceStore {
    /// Read the value stored under `key`. `None` covers both "never set"
    /// and "store unreachable".
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `localStorage`-backed store.
///
/// Browser-only: outside the `hydrate` build every key reads as absent and
/// every write fails, which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError)?;
            storage.set_item(key, value).map_err(|_| StoreError)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError)
        }
    }
}

/// Store for environments with no persistence at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError)
    }
}
