use contracts::shared::navigation::section_href;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::dom;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_global_context();
    let navbar_offset = ctx.navigation().navbar_offset_px;

    view! {
        <section id="home" class="section hero">
            <div class="hero__content">
                <h1 class="hero__title">"Design & development for the web"</h1>
                <p class="hero__subtitle">
                    "Fast, accessible sites built with care, from first sketch to launch."
                </p>
                <a
                    href=section_href("contact")
                    class="button button--primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_section("contact", navbar_offset);
                    }
                >
                    "Get in touch"
                </a>
            </div>
        </section>
    }
}
