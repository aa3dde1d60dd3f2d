//! Positions Form Entry Point
//!
//! Telegram WebApp mini-app for creating product positions.

mod app;
mod components;
mod config;
mod context;
mod models;
mod platform;
mod store;
mod submit;
mod upload;
mod validate;

use app::App;
use config::BootstrapConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    platform::expand();
    platform::enable_closing_confirmation();
    platform::main_button_set_text(platform::SAVE_LABEL);
    platform::main_button_show();

    let config = BootstrapConfig::from_location();
    mount_to_body(move || view! { <App config=config.clone() /> });
}
