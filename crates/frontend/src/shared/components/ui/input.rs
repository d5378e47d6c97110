use leptos::prelude::*;

/// Input component with label and inline error message
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
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
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID and name for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=input_id
                class="form__input"
                class:form__input--invalid=has_error
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                autocomplete=input_autocomplete
                aria-invalid=move || has_error().to_string()
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
            />
            <span class="error-message" role="alert" style:display=move || if has_error() { "block" } else { "none" }>
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}
