//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content;
use crate::pages::home::HomePage;
use crate::state::theme::{self, ThemePreference};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The `data-mode` attribute is pre-set to the dark-first default so the
/// first paint never flashes the wrong palette; hydration reconciles it
/// against the stored preference.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-mode=theme::mode_token(theme::DEFAULT_DARK)>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1, minimum-scale=1"/>
                <link rel="icon" type="image/png" href="/picture.png"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Phase 1: deterministic dark-first default, valid without storage.
    let pref = RwSignal::new(ThemePreference::default());
    provide_context(pref);

    // Phase 2: hydration reconciliation. Effects only run in the browser,
    // where the preference store is reachable; the signal is only touched
    // when the stored value disagrees with the rendered default.
    Effect::new(move || {
        let resolved = theme::browser().initialize(theme::DEFAULT_DARK);
        if pref.get_untracked().is_dark != resolved {
            pref.set(ThemePreference { is_dark: resolved });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=content::SITE_OWNER/>
        <Meta name="description" content=content::SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
