use leptos::prelude::*;

const SERVICES: &[(&str, &str)] = &[
    ("Web design", "Clean layouts and a consistent visual language."),
    ("Development", "Responsive, standards-based front-end code."),
    ("Maintenance", "Updates, fixes and performance tuning after launch."),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <h2 class="section__title">"Services"</h2>
            <div class="services__grid">
                {SERVICES.iter().map(|&(title, text)| view! {
                    <article class="service-card">
                        <h3 class="service-card__title">{title}</h3>
                        <p class="service-card__text">{text}</p>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}
