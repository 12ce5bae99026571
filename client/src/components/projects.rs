//! Projects showcase section.

use leptos::prelude::*;

use crate::content::{self, Project};

/// Grid of showcased project cards.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="projects" id="projects">
            <h1 class="section-title">
                "Projects I " <span class="section-title__accent">"worked"</span> " on"
            </h1>

            <div class="projects__grid">
                {content::PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Single project card with an outbound link.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3 class="project-card__name">{project.name}</h3>
            <p class="project-card__description">{project.description}</p>
            <a class="project-card__link" href=project.link>
                {project.link_label}
            </a>
        </article>
    }
}
