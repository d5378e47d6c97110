pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::scroll_spy::install_scroll_spy;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |          Navbar (fixed, hamburger)       |
/// +------------------------------------------+
/// |   <section id=...> content sections      |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    // Sections must be mounted before their geometry can be read
    Effect::new(move |_| {
        install_scroll_spy(ctx);
    });

    view! {
        <header::Navbar />
        <main class="main">
            {children()}
        </main>
        <footer::Footer />
    }
}
