//! Subitem Form Component
//!
//! Edits one nested variant entry under a grouped position.

use leptos::prelude::*;

use crate::components::ValidatedField;
use crate::models::Subitem;
use crate::store::{
    store_update_position, store_update_subitem, use_form_store, FormStateStoreFields,
};

/// One subitem row: title, warehouse switch and count
#[component]
pub fn SubitemForm(position_id: u64, subitem_id: u64) -> impl IntoView {
    let store = use_form_store();

    // Lookup strictly by stable ids; survives deletions of earlier rows.
    // The fallback reuses this row's id so a just-deleted row never mints
    // fresh identities while it unmounts.
    let subitem = Memo::new(move |_| {
        store
            .positions()
            .get()
            .iter()
            .find(|p| p.id == position_id)
            .and_then(|p| p.subitems.iter().find(|s| s.id == subitem_id).cloned())
            .unwrap_or_else(|| Subitem::with_id(subitem_id))
    });

    let can_delete = Memo::new(move |_| {
        store
            .positions()
            .get()
            .iter()
            .find(|p| p.id == position_id)
            .map(|p| p.subitems.len() > 1)
            .unwrap_or(false)
    });

    let set_title = move |ev| {
        let value = event_target_value(&ev);
        store_update_subitem(&store, position_id, subitem_id, |s| s.title = value);
    };

    let toggle_warehouse = move |ev| {
        let checked = event_target_checked(&ev);
        store_update_subitem(&store, position_id, subitem_id, |s| s.warehouse = checked);
    };

    let set_count = move |ev| {
        let value = event_target_value(&ev);
        store_update_subitem(&store, position_id, subitem_id, |s| s.warehouse_count = value);
    };

    view! {
        <div class="subitem">
            <ValidatedField
                label="Название подтовара"
                errors=Signal::derive(move || subitem.get().title_errors)
            >
                <input
                    type="text"
                    prop:value=move || subitem.get().title
                    on:input=set_title
                />
            </ValidatedField>

            <div class="form-field">
                <label>"Склад"</label>
                <input
                    type="checkbox"
                    prop:checked=move || subitem.get().warehouse
                    on:change=toggle_warehouse
                />
            </div>

            <Show when=move || subitem.get().warehouse>
                <ValidatedField
                    label="Количество подтовара на складе"
                    errors=Signal::derive(move || subitem.get().warehouse_count_errors)
                >
                    <input
                        type="number"
                        prop:value=move || subitem.get().warehouse_count
                        on:input=set_count
                    />
                </ValidatedField>
            </Show>

            <Show when=move || can_delete.get()>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| {
                        store_update_position(&store, position_id, |p| p.remove_subitem(subitem_id))
                    }
                >
                    "Удалить подтовар"
                </button>
            </Show>
        </div>
    }
}
