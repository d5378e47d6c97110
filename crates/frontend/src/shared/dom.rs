//! Thin wrappers over the browser APIs the page needs.
//!
//! Everything here is best-effort: a missing window or element is logged and
//! skipped, never raised.

use contracts::shared::navigation::{smooth_scroll_target, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Smooth-scroll so that section `id` sits just below the fixed navbar.
pub fn scroll_to_section(id: &str, navbar_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(section) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("Section #{} not found", id);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(smooth_scroll_target(
        f64::from(section.offset_top()),
        navbar_offset,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Geometry of every `<section id=...>` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(section) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionBounds::new(
            section.id(),
            f64::from(section.offset_top()),
            f64::from(section.client_height()),
        ));
    }
    sections
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

pub fn scroll_into_view_centered(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Navigate to `url`; used for `mailto:` links.
pub fn open_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        log::warn!("Failed to open link: {:?}", err);
    }
}
