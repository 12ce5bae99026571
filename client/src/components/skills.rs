//! Skills section.

use leptos::prelude::*;

use crate::content::{self, Skill};

/// List of skill entries with their tool chips.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="skills" id="skills">
            <h1 class="section-title">
                "What I do " <span class="section-title__accent">"best"</span>
            </h1>

            <div class="skills__list">
                {content::SKILLS
                    .iter()
                    .map(|skill| view! { <SkillEntry skill=skill/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One skill with its description and tools.
#[component]
fn SkillEntry(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="skill-entry">
            <h3 class="skill-entry__title">{skill.title}</h3>
            <p class="skill-entry__description">{skill.description}</p>
            <ul class="skill-entry__tools">
                {skill
                    .tools
                    .iter()
                    .map(|tool| view! { <li class="skill-entry__tool">{*tool}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
