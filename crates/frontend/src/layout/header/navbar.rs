use contracts::shared::navigation::{anchor_target, section_href};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::landing::SECTIONS;
use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::dom;
use crate::shared::theme::ThemeToggle;

/// Closes the mobile menu on any click outside the navbar.
fn close_menu_on_outside_click(nav_ref: NodeRef<leptos::html::Nav>, ctx: AppGlobalContext) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        if !ctx.menu_open.get_untracked() {
            return;
        }

        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let inside = match (nav_ref.get_untracked(), target) {
            (Some(nav), Some(target)) => nav.contains(Some(&target)),
            _ => false,
        };

        if !inside {
            ctx.close_menu();
        }
    }) as Box<dyn FnMut(_)>);

    if document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to install outside-click listener for the menu");
    }
    closure.forget(); // Keep the closure alive
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let navbar_offset = ctx.navigation().navbar_offset_px;

    Effect::new(move |_| {
        close_menu_on_outside_click(nav_ref, ctx);
    });

    // Anchor clicks: close the menu and scroll below the fixed navbar
    let follow_anchor = move |ev: web_sys::MouseEvent, href: &str| {
        let Some(id) = anchor_target(href) else {
            return;
        };
        ev.prevent_default();
        ctx.close_menu();
        dom::scroll_to_section(id, navbar_offset);
    };

    view! {
        <nav class="navbar" node_ref=nav_ref>
            <div class="navbar__container">
                <a
                    href=section_href(SECTIONS[0].0)
                    class="navbar__logo"
                    on:click=move |ev| follow_anchor(ev, &section_href(SECTIONS[0].0))
                >
                    "Portfolio"
                </a>

                <ul id="nav-menu" class="nav-menu" class:active=move || ctx.menu_open.get()>
                    {SECTIONS.iter().map(|&(id, title)| {
                        let href = section_href(id);
                        let link_href = href.clone();
                        view! {
                            <li class="nav-item">
                                <a
                                    href=href
                                    class="nav-link"
                                    class:active=move || ctx.is_active(id)
                                    on:click=move |ev| follow_anchor(ev, &link_href)
                                >
                                    {title}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <div class="navbar__actions">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="hamburger"
                        class:active=move || ctx.menu_open.get()
                        aria-label="Toggle navigation"
                        aria-controls="nav-menu"
                        aria-expanded=move || ctx.menu_open.get().to_string()
                        on:click=move |_| ctx.toggle_menu()
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
