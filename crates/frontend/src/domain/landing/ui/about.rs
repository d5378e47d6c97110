use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About"</h2>
            <p class="section__text">
                "I build marketing sites and portfolios that load quickly, read well on any \
                 screen and are easy to maintain."
            </p>
        </section>
    }
}
