//! Positions Form App
//!
//! Owns the form store, wires the platform main button, and drives the
//! submission pipeline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::PositionForm;
use crate::config::BootstrapConfig;
use crate::context::AppContext;
use crate::platform::{self, HostPlatform, Telegram};
use crate::store::{store_add_position, store_set_positions, FormState, FormStateStoreFields};
use crate::submit::{
    begin_submission, finish_submission, gate_submission, submit_positions, SubmitGate,
};

#[component]
pub fn App(config: BootstrapConfig) -> impl IntoView {
    let store = Store::new(FormState::new());
    provide_context(store);

    let ctx = AppContext::new(config);
    provide_context(ctx.clone());

    let save = {
        let ctx = ctx.clone();
        move || {
            // one submission at a time; the disabled button is only a UI guard
            if ctx.submitting.get_untracked() {
                return;
            }

            let positions = store.positions().get_untracked();
            match gate_submission(&ctx.config, &positions) {
                SubmitGate::Blocked(validated) => {
                    store_set_positions(&store, validated);
                }
                SubmitGate::Ready { validated, request } => {
                    store_set_positions(&store, validated);
                    ctx.submitting.set(true);
                    begin_submission(&Telegram);

                    let host = ctx.config.host.clone();
                    let submitting = ctx.submitting;
                    spawn_local(async move {
                        let result = submit_positions(&host, &request).await;
                        if let Err(e) = &result {
                            web_sys::console::log_1(&format!("[SUBMIT] {e}").into());
                        }
                        finish_submission(&Telegram, &result);
                        submitting.set(false);
                    });
                }
            }
        }
    };

    // Platform trigger: one registration for the whole session
    {
        let save = save.clone();
        platform::on_main_button_click(move || {
            Telegram.haptic_impact("medium");
            save();
        });
    }

    let save_click = save.clone();
    let submitting = ctx.submitting;

    view! {
        <div class="form">
            <For
                each=move || store.positions().get()
                key=|p| p.id
                children=move |p| view! { <PositionForm position_id=p.id /> }
            />
            <button
                type="button"
                class="btn add-btn"
                on:click=move |_| store_add_position(&store)
            >
                "Добавить другой товар"
            </button>
            <button
                type="button"
                class="btn save-btn"
                disabled=move || submitting.get()
                on:click=move |_| save_click()
            >
                "Сохранить"
            </button>
        </div>
    }
}
