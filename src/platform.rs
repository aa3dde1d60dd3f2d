//! Host Platform Bindings
//!
//! Telegram WebApp surface consumed by the form, bound via wasm-bindgen.
//! The submission pipeline only talks to the `HostPlatform` trait so its
//! button choreography can be exercised without a real host.

use serde::Serialize;
use wasm_bindgen::closure::Closure;

mod ext {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp"])]
        pub fn expand();

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp"], js_name = enableClosingConfirmation)]
        pub fn enable_closing_confirmation();

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp"])]
        pub fn close();

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp", "MainButton"], js_name = setText)]
        pub fn main_button_set_text(text: &str);

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp", "MainButton"], js_name = show)]
        pub fn main_button_show();

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp", "MainButton"], js_name = setParams)]
        pub fn main_button_set_params(params: JsValue);

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp", "MainButton"], js_name = onClick)]
        pub fn main_button_on_click(callback: &Closure<dyn FnMut()>);

        #[wasm_bindgen(js_namespace = ["window", "Telegram", "WebApp", "HapticFeedback"], js_name = impactOccurred)]
        pub fn haptic_impact_occurred(style: &str);
    }
}

/// Expand the WebApp viewport to full height
pub fn expand() {
    ext::expand();
}

/// Ask the host to confirm before the user closes the view
pub fn enable_closing_confirmation() {
    ext::enable_closing_confirmation();
}

pub fn main_button_set_text(text: &str) {
    ext::main_button_set_text(text);
}

pub fn main_button_show() {
    ext::main_button_show();
}

/// Primary-action label in its idle state
pub const SAVE_LABEL: &str = "Сохранить";
/// Primary-action label while a submission is outstanding
pub const SUBMITTING_LABEL: &str = "Отправка...";

/// Structured `MainButton.setParams` payload; `None` fields are omitted so
/// the host keeps its current value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MainButtonParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

pub fn main_button_set_params(params: &MainButtonParams) {
    if let Ok(value) = serde_wasm_bindgen::to_value(params) {
        ext::main_button_set_params(value);
    }
}

/// Register the primary-action click handler. The closure is leaked; the
/// handler lives for the whole session.
pub fn on_main_button_click(handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    ext::main_button_on_click(&closure);
    closure.forget();
}

/// Host capabilities the submission pipeline depends on
pub trait HostPlatform {
    fn enable_main_button(&self);
    fn disable_main_button(&self);
    fn haptic_impact(&self, style: &str);
    fn close(&self);
}

/// The real Telegram WebApp host
#[derive(Clone, Copy, Default)]
pub struct Telegram;

impl HostPlatform for Telegram {
    fn enable_main_button(&self) {
        main_button_set_params(&MainButtonParams {
            text: Some(SAVE_LABEL.to_string()),
            is_active: Some(true),
            is_visible: None,
        });
    }

    fn disable_main_button(&self) {
        main_button_set_params(&MainButtonParams {
            text: Some(SUBMITTING_LABEL.to_string()),
            is_active: Some(false),
            is_visible: None,
        });
    }

    fn haptic_impact(&self, style: &str) {
        ext::haptic_impact_occurred(style);
    }

    fn close(&self) {
        ext::close();
    }
}
