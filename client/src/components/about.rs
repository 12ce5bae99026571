//! About section.

use leptos::prelude::*;

use crate::content;

/// "Behind the scenes" section with portrait and introduction.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <h1 class="section-title">
                "Behind the " <span class="section-title__accent">"scenes"</span>
            </h1>

            <article class="about__body">
                <img class="about__portrait" src="/picture.png" alt=content::SITE_OWNER/>

                <div class="about__copy">
                    <h2>"I'm " {content::SITE_OWNER}</h2>
                    <p>
                        "A passionate web developer based in France, currently studying \
                         computer science. My fascination with mathematics fuels my \
                         analytical and creative approach to development."
                    </p>
                    <p>
                        "In between web projects, you'll often find me immersed in the \
                         creation of new programming languages, a passion that allows me \
                         to explore the limits of technological innovation."
                    </p>
                    <p>
                        "Join me on this adventure where code meets math, and where every \
                         line written is a new opportunity to redefine what's possible."
                    </p>
                    <a class="about__cta" href="#contact">
                        "Get in touch"
                    </a>
                </div>
            </article>
        </section>
    }
}
