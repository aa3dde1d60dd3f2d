//! Kind Selector Component
//!
//! Simple/Grouped toggle buttons for a position.

use leptos::prelude::*;

/// Kind options: (grouped?, label)
pub const POSITION_KINDS: &[(bool, &str)] = &[
    (false, "Простой"),
    (true, "Сгрупированный"),
];

/// Toggle between a simple position and a grouped one
#[component]
pub fn KindSelector(
    #[prop(into)] grouped: Signal<bool>,
    on_change: impl Fn(bool) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="kind-selector">
            {POSITION_KINDS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || grouped.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
