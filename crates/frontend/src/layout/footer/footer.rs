use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <p class="footer__text">{format!("© {} Portfolio. All rights reserved.", year)}</p>
        </footer>
    }
}
