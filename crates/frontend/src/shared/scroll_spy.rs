//! Highlights the nav link of the section currently in view.

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::navigation::{active_section, ThrottleGate};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom;

fn refresh_active_section(ctx: AppGlobalContext, offset: f64) {
    let sections = dom::section_bounds();
    let active = active_section(dom::scroll_y(), &sections, offset).map(str::to_string);
    ctx.set_active_section(active);
}

/// Registers a throttled window `scroll` listener that keeps
/// `ctx.active_section` up to date. Lives as long as the page.
pub fn install_scroll_spy(ctx: AppGlobalContext) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let navigation = ctx.navigation();
    let offset = navigation.scroll_spy_offset_px;
    let throttle_ms = navigation.scroll_throttle_ms;
    let gate = Rc::new(Cell::new(ThrottleGate::default()));

    refresh_active_section(ctx, offset);

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let mut state = gate.get();
        if !state.request() {
            return;
        }
        gate.set(state);

        let gate = Rc::clone(&gate);
        spawn_local(async move {
            TimeoutFuture::new(throttle_ms).await;
            refresh_active_section(ctx, offset);

            let mut state = gate.get();
            state.complete();
            gate.set(state);
        });
    }) as Box<dyn FnMut(_)>);

    if window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to register scroll listener");
    }
    closure.forget(); // Keep the closure alive
}
