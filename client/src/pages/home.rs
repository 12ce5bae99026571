//! The single portfolio page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

/// Portfolio page: hero, about, projects, skills, contact.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>
            <hr class="section-divider"/>
            <About/>
            <hr class="section-divider"/>
            <Projects/>
            <hr class="section-divider"/>
            <Skills/>
            <Contact/>
        </main>
    }
}
