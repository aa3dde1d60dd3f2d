//! Validated Field Component
//!
//! Label + control + the field's current error list.

use leptos::prelude::*;

/// Form field wrapper that renders validation errors under its control
#[component]
pub fn ValidatedField(
    #[prop(into)] label: String,
    #[prop(into)] errors: Signal<Vec<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            if errors.get().is_empty() { "form-field" } else { "form-field invalid" }
        }>
            <label>{label}</label>
            {children()}
            <Show when=move || !errors.get().is_empty()>
                <ul class="errors">
                    <For
                        each=move || errors.get()
                        key=|e| e.clone()
                        children=|e| view! { <li>{e}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}
