use leptos::prelude::*;

/// Textarea component with label and inline error message
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Error message; `Some` marks the field invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID and name for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(5);
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                name=textarea_id
                class="form__textarea"
                class:form__textarea--invalid=has_error
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            ></textarea>
            <span class="error-message" role="alert" style:display=move || if has_error() { "block" } else { "none" }>
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}
