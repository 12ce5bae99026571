//! Full-height hero section: headline, aside navigation, theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::util::tagline;

/// Hero header filling the first viewport.
///
/// The headline tagline is server-rendered with the deterministic default
/// and re-picked at random once the browser takes over.
#[component]
pub fn Hero() -> impl IntoView {
    let word = RwSignal::new(tagline::SSR_TAGLINE);

    // Effects only run in the browser, so SSR output stays stable.
    Effect::new(move || {
        word.set(tagline::random_tagline());
    });

    view! {
        <header class="hero">
            <section class="hero__body">
                <aside class="hero__nav">
                    {content::NAV_LINKS
                        .iter()
                        .map(|&(name, href)| view! { <AsideLink name=name href=href/> })
                        .collect::<Vec<_>>()}
                </aside>

                <article class="hero__headline">
                    <h1>
                        "I Create "
                        <span class="hero__accent">{move || word.get()}</span>
                        <br/>
                        "web experiences."
                    </h1>
                </article>

                <div class="hero__toggle">
                    <ThemeToggle/>
                </div>
            </section>

            <footer class="hero__footer">
                <p>"thomas vergne."</p>
            </footer>
        </header>
    }
}

/// Rotated in-page navigation link in the hero aside.
#[component]
fn AsideLink(name: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a class="hero__nav-link" href=href>
            {name}
        </a>
    }
}
