use contracts::domain::contact::ContactMessage;
use contracts::shared::mailto::compose_mailto;
use contracts::shared::validation::defaults::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use contracts::shared::validation::{display_name, evaluate, validate_form, ErrorPresenter};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FieldErrors, SuccessBanner};
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::dom;

/// Shows the banner, scrolls it into view and hides it after `hide_after_ms`.
///
/// The hide is fire-and-forget: submitting again before it fires schedules a
/// second hide, and the earlier one may cut the new banner short.
fn show_success(visible: RwSignal<bool>, banner_ref: NodeRef<leptos::html::Div>, hide_after_ms: u32) {
    visible.set(true);

    spawn_local(async move {
        // Let the banner render before scrolling to it
        TimeoutFuture::new(0).await;
        if let Some(banner) = banner_ref.get_untracked() {
            dom::scroll_into_view_centered(&banner);
        }
    });

    spawn_local(async move {
        TimeoutFuture::new(hide_after_ms).await;
        visible.set(false);
    });
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_global_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = FieldErrors::new();

    let banner_visible = RwSignal::new(false);
    let banner_ref = NodeRef::<leptos::html::Div>::new();

    // Blur: full check of a single field
    let check = move |field: &'static str, value: RwSignal<String>| {
        let result = ctx
            .rules
            .with_value(|rules| value.with_untracked(|v| evaluate(field, v, rules)));
        let mut presenter = errors;
        presenter.present(field, &result);
    };

    // Input: store the value, drop the error until the next blur/submit
    let edit = move |field: &'static str, value: RwSignal<String>, new_value: String| {
        value.set(new_value);
        let mut presenter = errors;
        presenter.clear_error(field);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactMessage::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        let report = ctx.rules.with_value(|rules| validate_form(&submission, rules));

        let mut presenter = errors;
        presenter.present_report(&report);

        if !report.is_valid() {
            log::debug!(
                "Contact form rejected: {} invalid field(s)",
                report.error_count()
            );
            return;
        }

        let contact = ctx.config.with_value(|config| config.contact.clone());
        log::info!("Contact form submitted (delivery: {:?})", contact.delivery);

        name.set(String::new());
        email.set(String::new());
        message.set(String::new());

        if contact.delivery.opens_mailto() {
            dom::open_url(&compose_mailto(
                &contact.recipient,
                &contact.subject,
                &submission,
            ));
        }

        if contact.delivery.shows_banner() {
            show_success(banner_visible, banner_ref, contact.success_hide_ms);
        }
    };

    view! {
        <div class="contact__body">
            <form
                id="contactForm"
                class="contact-form"
                class:contact-form--has-errors=move || errors.has_errors()
                novalidate=true
                on:submit=on_submit
            >
                <Input
                    id=FIELD_NAME
                    label=display_name(FIELD_NAME).to_string()
                    value=name
                    placeholder="Your name"
                    autocomplete="name"
                    required=true
                    error=errors.error_for(FIELD_NAME)
                    on_input=Callback::new(move |v: String| edit(FIELD_NAME, name, v))
                    on_blur=Callback::new(move |_: ()| check(FIELD_NAME, name))
                />
                <Input
                    id=FIELD_EMAIL
                    label=display_name(FIELD_EMAIL).to_string()
                    input_type="email"
                    value=email
                    placeholder="you@example.com"
                    autocomplete="email"
                    required=true
                    error=errors.error_for(FIELD_EMAIL)
                    on_input=Callback::new(move |v: String| edit(FIELD_EMAIL, email, v))
                    on_blur=Callback::new(move |_: ()| check(FIELD_EMAIL, email))
                />
                <Textarea
                    id=FIELD_MESSAGE
                    label=display_name(FIELD_MESSAGE).to_string()
                    value=message
                    placeholder="Tell me about your project"
                    rows=6
                    required=true
                    error=errors.error_for(FIELD_MESSAGE)
                    on_input=Callback::new(move |v: String| edit(FIELD_MESSAGE, message, v))
                    on_blur=Callback::new(move |_: ()| check(FIELD_MESSAGE, message))
                />
                <Button button_type="submit">"Send message"</Button>
            </form>

            <SuccessBanner visible=banner_visible banner_ref=banner_ref />
        </div>
    }
}
