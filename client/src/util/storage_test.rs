#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// BrowserStore outside the browser build
// =============================================================

#[test]
fn browser_store_reads_as_absent() {
    assert_eq!(BrowserStore.get("darkMode"), None);
}

#[test]
fn browser_store_writes_fail() {
    assert_eq!(BrowserStore.set("darkMode", "true"), Err(StoreError));
}

// =============================================================
// NoopStore
// =============================================================

#[test]
fn noop_store_reads_as_absent() {
    assert_eq!(NoopStore.get("anything"), None);
}

#[test]
fn noop_store_writes_fail() {
    assert_eq!(NoopStore.set("anything", "value"), Err(StoreError));
}

#[test]
fn store_error_is_comparable() {
    assert_eq!(StoreError, StoreError);
    assert_eq!(StoreError.to_string(), "preference store rejected the write");
}
