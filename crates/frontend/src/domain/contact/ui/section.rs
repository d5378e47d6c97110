use leptos::prelude::*;

use super::ContactForm;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Contact"</h2>
            <p class="section__text">"Have a project in mind? Send me a message."</p>
            <ContactForm />
        </section>
    }
}
