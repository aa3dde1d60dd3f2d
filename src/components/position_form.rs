//! Position Form Component
//!
//! Edits one position: title, image, category, price, description,
//! warehouse data, kind, and the nested subitem list.

use leptos::prelude::*;

use crate::components::{ImageUpload, KindSelector, SubitemForm, ValidatedField};
use crate::context::use_app_context;
use crate::models::{Position, UploadedImage};
use crate::store::{
    store_remove_position, store_update_position, use_form_store, FormStateStoreFields,
};

/// One position's form section
#[component]
pub fn PositionForm(position_id: u64) -> impl IntoView {
    let store = use_form_store();
    let ctx = use_app_context();

    // Lookup strictly by stable id; the row never depends on its index.
    // The fallback only covers the render tick right after deletion, so it
    // reuses this row's id instead of minting a fresh one.
    let position = Memo::new(move |_| {
        store
            .positions()
            .get()
            .iter()
            .find(|p| p.id == position_id)
            .cloned()
            .unwrap_or_else(|| Position::with_id(position_id))
    });

    let can_delete = Memo::new(move |_| store.positions().get().len() > 1);

    // Configured categories plus the catch-all "Другое". The category never
    // leaves the client in the wire payload, so the option value is simply
    // the label; the empty string stays reserved for "nothing chosen yet".
    let categories: Vec<String> = ctx
        .config
        .categories
        .iter()
        .cloned()
        .chain(std::iter::once("Другое".to_string()))
        .collect();

    let set_title = move |ev| {
        let value = event_target_value(&ev);
        store_update_position(&store, position_id, |p| p.title = value);
    };

    let set_category = move |ev| {
        let value = event_target_value(&ev);
        store_update_position(&store, position_id, |p| p.category = value);
    };

    let set_price = move |ev| {
        let value = event_target_value(&ev);
        store_update_position(&store, position_id, |p| p.price = value);
    };

    let set_description = move |ev| {
        let value = event_target_value(&ev);
        store_update_position(&store, position_id, |p| p.description = value);
    };

    let toggle_warehouse = move |ev| {
        let checked = event_target_checked(&ev);
        store_update_position(&store, position_id, |p| p.warehouse = checked);
    };

    let set_count = move |ev| {
        let value = event_target_value(&ev);
        store_update_position(&store, position_id, |p| p.warehouse_count = value);
    };

    let on_image = Callback::new(move |image: UploadedImage| {
        store_update_position(&store, position_id, |p| p.image = Some(image));
    });

    let on_kind = move |grouped: bool| {
        store_update_position(&store, position_id, |p| p.set_grouped(grouped));
    };

    view! {
        <div class="position-form">
            <ValidatedField
                label="Название"
                errors=Signal::derive(move || position.get().title_errors)
            >
                <input
                    type="text"
                    prop:value=move || position.get().title
                    on:input=set_title
                />
            </ValidatedField>

            <ValidatedField
                label="Изображение"
                errors=Signal::derive(move || position.get().image_errors)
            >
                <ImageUpload
                    image=Signal::derive(move || position.get().image)
                    on_change=on_image
                />
            </ValidatedField>

            <div class="form-field">
                <label>"Категория"</label>
                <select on:change=set_category>
                    <option
                        value=""
                        disabled=true
                        selected=move || position.get().category.is_empty()
                    >
                        "Выберите категорию"
                    </option>
                    {categories.into_iter().map(|category| {
                        let selected = {
                            let category = category.clone();
                            move || position.get().category == category
                        };
                        view! {
                            <option value=category.clone() selected=selected>
                                {category.clone()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <ValidatedField
                label="Стоимость"
                errors=Signal::derive(move || position.get().price_errors)
            >
                <input
                    type="number"
                    prop:value=move || position.get().price
                    on:input=set_price
                />
            </ValidatedField>

            <div class="form-field">
                <label>"Описание"</label>
                <textarea
                    rows=3
                    prop:value=move || position.get().description
                    on:input=set_description
                />
            </div>

            <div class="form-field">
                <label>"Склад"</label>
                <input
                    type="checkbox"
                    prop:checked=move || position.get().warehouse
                    on:change=toggle_warehouse
                />
            </div>

            <Show when=move || position.get().warehouse>
                <ValidatedField
                    label="Количество товара на складе"
                    errors=Signal::derive(move || position.get().warehouse_count_errors)
                >
                    <input
                        type="number"
                        prop:value=move || position.get().warehouse_count
                        on:input=set_count
                    />
                </ValidatedField>
            </Show>

            <div class="form-field">
                <label>"Тип"</label>
                <KindSelector
                    grouped=Signal::derive(move || position.get().kind.is_grouped())
                    on_change=on_kind
                />
            </div>

            <Show when=move || position.get().kind.is_grouped()>
                <div class="subitems">
                    <For
                        each=move || position.get().subitems
                        key=|s| s.id
                        children=move |s| view! {
                            <SubitemForm position_id=position_id subitem_id=s.id />
                        }
                    />
                    <button
                        type="button"
                        on:click=move |_| {
                            store_update_position(&store, position_id, |p| p.add_subitem())
                        }
                    >
                        "Добавить подтовар"
                    </button>
                </div>
            </Show>

            <Show when=move || can_delete.get()>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| store_remove_position(&store, position_id)
                >
                    "Удалить товар"
                </button>
            </Show>
        </div>
    }
}
