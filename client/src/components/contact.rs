//! Contact section.

use leptos::prelude::*;

use crate::content;

/// Contact section with email and external profiles.
#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", content::CONTACT_EMAIL);

    view! {
        <section class="contact" id="contact">
            <h1 class="section-title">
                "How to " <span class="section-title__accent">"reach"</span> " me"
            </h1>

            <div class="contact__body">
                <div>
                    <p>"You can reach me by email at"</p>
                    <a class="contact__email" href=mailto>
                        {content::CONTACT_EMAIL}
                    </a>
                </div>

                <div>
                    <p>"Also, you can find me on"</p>
                    <ul class="contact__socials">
                        {content::SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <li class="contact__social">
                                        <a href=social.href>{social.label}</a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
