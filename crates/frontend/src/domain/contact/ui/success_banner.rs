use leptos::prelude::*;

#[component]
pub fn SuccessBanner(
    /// Visibility flag; the banner stays mounted so it can be scrolled to
    visible: RwSignal<bool>,
    banner_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    view! {
        <div
            id="formSuccess"
            class="form-success"
            role="status"
            node_ref=banner_ref
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <p>"Thank you! Your message has been sent successfully."</p>
        </div>
    }
}
