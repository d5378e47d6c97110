use super::{use_theme, Theme};
use leptos::prelude::*;

/// Navbar button switching between light and dark theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    let icon = move || match ctx.get_theme() {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || ctx.get_theme().toggle_label()
            title=move || ctx.get_theme().toggle_label()
            aria-pressed=move || ctx.get_theme().is_dark().to_string()
            on:click=move |_| ctx.toggle()
        >
            {icon}
        </button>
    }
}
