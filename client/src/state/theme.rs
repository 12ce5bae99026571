//! Theme preference: persistence, defaulting, and the document marker.
//!
//! DESIGN
//! ======
//! The preference lives in three places that must agree: the reactive
//! signal, the `localStorage` entry under `"darkMode"`, and the
//! `data-mode` attribute on `<html>` that the stylesheet keys off. All
//! writes to the latter two go through [`ThemeStore::initialize`] and
//! [`ThemeStore::toggle`] so the marker and the stored value can never be
//! updated independently.
//!
//! Server rendering has no storage, so the first pass always resolves to
//! the dark-first default; hydration runs `initialize` a second time to
//! reconcile against the stored preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::{BrowserStore, PreferenceStore};

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Attribute on `<html>` consumed by the stylesheet.
const MODE_ATTR: &str = "data-mode";

/// Pre-hydration default: the site renders dark-first.
pub const DEFAULT_DARK: bool = true;

/// Theme preference resolved for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    pub is_dark: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { is_dark: DEFAULT_DARK }
    }
}

/// Marker value for a given preference.
pub fn mode_token(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Single writer for the theme preference and its document marker.
pub struct ThemeStore<S> {
    store: S,
}

/// ThemeStore over the browser-backed preference store.
pub fn browser() -> ThemeStore<BrowserStore> {
    ThemeStore::new(BrowserStore)
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve the preference for this session.
    ///
    /// A present, well-formed stored token wins; an absent store, absent
    /// key, or malformed token falls back to `default_value`. The document
    /// marker is updated to the resolved value before returning. Never
    /// fails, whatever the store does.
    pub fn initialize(&self, default_value: bool) -> bool {
        let resolved = self
            .store
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(default_value);
        apply_marker(resolved);
        resolved
    }

    /// Flip the preference, persist it, and update the document marker.
    ///
    /// Always returns `!current`. A failed write is ignored: the marker
    /// and the returned value still move so the toggle works for the rest
    /// of the session even when the preference cannot persist.
    pub fn toggle(&self, current: bool) -> bool {
        let next = !current;
        apply_marker(next);
        if let Ok(token) = serde_json::to_string(&next) {
            let _ = self.store.set(STORAGE_KEY, &token);
        }
        next
    }
}

/// Set the `data-mode` attribute on the `<html>` element.
///
/// Only `initialize` and `toggle` call this, keeping the shared document
/// surface single-writer.
fn apply_marker(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(MODE_ATTR, mode_token(dark));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
