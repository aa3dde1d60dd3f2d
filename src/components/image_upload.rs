//! Image Upload Component
//!
//! File input that drives the upload collaborator and reports the handle's
//! state transitions back to the owning form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::{UploadStatus, UploadedImage};
use crate::upload;

/// File picker for the position image
#[component]
pub fn ImageUpload(
    #[prop(into)] image: Signal<Option<UploadedImage>>,
    #[prop(into)] on_change: Callback<UploadedImage>,
) -> impl IntoView {
    let ctx = use_app_context();
    let host = ctx.config.host.clone();

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        on_change.run(UploadedImage::uploading());
        let host = host.clone();
        spawn_local(async move {
            match upload::upload_image(&host, &file).await {
                Ok(url) => on_change.run(UploadedImage::done(url)),
                Err(e) => {
                    web_sys::console::log_1(&format!("[UPLOAD] failed: {e}").into());
                    on_change.run(UploadedImage::failed());
                }
            }
        });
    };

    view! {
        <div class="image-upload">
            <input type="file" accept="image/*" on:change=on_file />
            {move || image.get().map(|img| match img.status {
                UploadStatus::Uploading => {
                    view! { <span class="upload-status">"Загрузка..."</span> }.into_any()
                }
                UploadStatus::Done => {
                    view! { <img class="upload-preview" src=img.url.clone() /> }.into_any()
                }
                UploadStatus::Error => {
                    view! { <span class="upload-status upload-error">"Ошибка загрузки"</span> }
                        .into_any()
                }
            })}
        </div>
    }
}
