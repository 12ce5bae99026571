//! Dark/light toggle control.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{self, ThemePreference};

/// Label naming the mode a click switches to.
fn toggle_label(is_dark: bool) -> &'static str {
    if is_dark { "Toggle light mode" } else { "Toggle dark mode" }
}

/// Button flipping the theme preference.
///
/// Reads the theme context for its label and routes the flip through the
/// theme store so the stored value and the document marker move together.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let pref = expect_context::<RwSignal<ThemePreference>>();

    let on_toggle = move |_| {
        let next = theme::browser().toggle(pref.get_untracked().is_dark);
        pref.set(ThemePreference { is_dark: next });
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle>
            <span>{move || toggle_label(pref.get().is_dark)}</span>
        </button>
    }
}
